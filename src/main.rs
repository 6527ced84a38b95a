use std::sync::Arc;

use hello_container::config::{self, AppState, Config};
use hello_container::{logger, server, startup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Create Tokio runtime, sizing the worker pool from configuration
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Routes are registered and validated before the listener exists
    let router = startup::build_router(&cfg.startup).map_err(|e| {
        logger::log_error(&format!("Startup aborted: {e}"));
        e
    })?;

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr, 128)?;
    let state = Arc::new(AppState::new(&cfg, router));

    logger::log_server_start(&addr, &cfg);

    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}
