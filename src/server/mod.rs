// Server module entry point
// Accept loop, connection handling and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::logger;
use crate::state::AppState;

/// Accept connections until `shutdown` is notified
///
/// Must run inside a `LocalSet`; connections are spawned with `spawn_local`.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => match accept_result {
                Ok((stream, peer_addr)) => {
                    connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                }
                Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
            },
            () = shutdown.notified() => {
                logger::log_info("[Shutdown] Listener closed");
                return;
            }
        }
    }
}
