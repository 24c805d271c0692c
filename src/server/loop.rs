// Server loop module
// Accepts connections until shutdown is requested, then drains in-flight ones

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop on `listener` until `state.shutdown_signal` fires.
///
/// After the listener is closed, open connections get up to
/// `performance.write_timeout` seconds to finish.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            &graceful,
                        );
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = state.shutdown_signal.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));

    let grace = Duration::from_secs(state.config.performance.write_timeout);
    if tokio::time::timeout(grace, graceful.shutdown()).await.is_err() {
        logger::log_warning(&format!(
            "Connections still open after {}s grace period, exiting anyway",
            grace.as_secs()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::directory::CityDirectory;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn raw_get(addr: std::net::SocketAddr, target: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8(response).unwrap()
    }

    #[tokio::test]
    async fn test_serves_cafe_requests_until_shutdown() {
        let mut config = Config::load_from("/nonexistent/cafe-config").unwrap();
        config.logging.access_log = false;
        let state = Arc::new(AppState::new(config, CityDirectory::builtin()));

        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(start_server_loop(listener, Arc::clone(&state)));

        let ok = raw_get(addr, "/cafe?count=2&city=moscow").await;
        assert!(ok.starts_with("HTTP/1.1 200 OK"), "{ok}");
        assert!(ok.ends_with("\r\n\r\nМир кофе,Сладкоежка"), "{ok}");

        let bad = raw_get(addr, "/cafe?count=2&city=ankh-morpork").await;
        assert!(bad.starts_with("HTTP/1.1 400 Bad Request"), "{bad}");
        assert!(bad.ends_with("\r\n\r\nwrong city value"), "{bad}");

        state.shutdown_signal.notify_one();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
    }
}
