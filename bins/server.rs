use std::process::ExitCode;

use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};
use uuid::Uuid;

fn build_runtime(server: &ServerConfig) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

/// Resolves on Ctrl+C; the server then stops accepting and drains open requests.
async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service = "artfolio", event = "shutdown_signal", "received Ctrl+C, draining"),
        Err(e) => warn!(service = "artfolio", event = "signal_error", error = %e, "cannot listen for Ctrl+C"),
    }
}

fn main() -> ExitCode {
    // .env before logging so RUST_LOG / LOG_FORMAT / CONFIG_PATH take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "artfolio", event = "panic", %instance, message = %info, "unhandled panic");
    }));

    let cfg: AppConfig = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "artfolio", event = "config_rejected", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg.server) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "artfolio", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "artfolio",
        event = "start",
        %instance,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        data = %cfg.storage.path,
        "artfolio starting"
    );

    match rt.block_on(server::run(cfg, ctrl_c())) {
        Ok(()) => {
            info!(service = "artfolio", event = "stop", %instance, "stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "artfolio", event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
