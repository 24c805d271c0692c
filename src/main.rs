use clap::Parser;
use std::sync::Arc;

use cafe_finder::config::{AppState, Config};
use cafe_finder::{logger, server};

/// Café lookup HTTP service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file path, without extension
    #[arg(short, long, default_value = "config")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Config::load_from(&cli.config)?;
    logger::init(&cfg)?;

    // Build Tokio runtime, sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let directory = cfg.build_directory()?;
    logger::log_directory_loaded(&directory, cfg.directory.seed_file.as_deref());

    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg, directory));
    server::start_signal_handler(Arc::clone(&state.shutdown_signal));
    server::start_server_loop(listener, state).await;

    Ok(())
}
