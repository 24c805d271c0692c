// 连接处理模块
// 处理单个 TCP 连接的接受和服务

use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppState;
use crate::handler;
use crate::logger::{self, AccessLogEntry};

/// Accept and process a connection, checking limits.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
/// * `graceful` - Tracks the connection so shutdown can wait for it
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    graceful: &GracefulShutdown,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
        graceful,
    );
}

/// Serve a single connection in a spawned task.
///
/// The connection is bounded by the larger of the read and write timeouts,
/// and waiting for a request head by `keep_alive_timeout`. The counter is
/// decremented when it ends.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
    graceful: &GracefulShutdown,
) {
    let io = TokioIo::new(stream);

    let performance = &state.config.performance;
    let timeout_duration = Duration::from_secs(std::cmp::max(
        performance.read_timeout,
        performance.write_timeout,
    ));

    let mut builder = http1::Builder::new();
    builder.timer(TokioTimer::new());
    if performance.keep_alive_timeout > 0 {
        builder
            .keep_alive(true)
            .header_read_timeout(Duration::from_secs(performance.keep_alive_timeout));
    } else {
        builder.keep_alive(false);
    }

    let conn = builder.serve_connection(
        io,
        service_fn(move |req: Request<Incoming>| {
            let state = Arc::clone(&state);
            async move { Ok::<_, Infallible>(serve(&req, peer_addr, &state)) }
        }),
    );
    let conn = graceful.watch(conn);

    tokio::spawn(async move {
        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Route one request and write its access log line
fn serve<B>(req: &Request<B>, peer_addr: SocketAddr, state: &AppState) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let resp = handler::handle_request(req, state);

    if state.access_log_enabled() {
        let body_bytes = resp.body().size_hint().exact().unwrap_or(0);
        let mut entry = AccessLogEntry::from_request(peer_addr, req);
        entry.finish(
            resp.status().as_u16(),
            usize::try_from(body_bytes).unwrap_or(usize::MAX),
            started.elapsed(),
        );
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    resp
}
