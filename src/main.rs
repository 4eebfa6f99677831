use std::sync::Arc;
use tokio::sync::Notify;

use rust_frontcontroller::{config, logger, server, state::AppState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);

    // One thread: every request is dispatched synchronously, in turn
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = server::create_reusable_listener(addr)?;
        logger::log_server_start(&addr, &state.config);

        let shutdown = Arc::new(Notify::new());
        server::signal::start_signal_handler(Arc::clone(&shutdown))?;

        let local = tokio::task::LocalSet::new();
        local.run_until(server::run(listener, state, shutdown)).await;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
