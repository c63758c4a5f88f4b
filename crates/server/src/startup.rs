use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the config at `CONFIG_PATH` (default `config.toml`).
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(&configs::config_path())
}

/// Config file at `path` when present, otherwise defaults with `SERVER_HOST`/`SERVER_PORT`
/// from env. A file that exists but does not parse or validate is an error.
pub fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    let invalid = |e: anyhow::Error| StartupError::InvalidConfig(e.to_string());
    let mut cfg = match configs::load_if_present(path).map_err(invalid)? {
        Some(cfg) => cfg,
        None => {
            warn!(%path, "config file not found; using defaults and env");
            let mut cfg = AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg
        }
    };
    cfg.normalize_and_validate().map_err(invalid)?;
    Ok(cfg)
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Open storage and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let kv = runtime::open_kv(&cfg.storage)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let state = ServerState::new(kv);
    Ok(routes::build_router(state, build_cors(), cfg.server.max_upload_bytes))
}

/// Serve `cfg` until `shutdown` resolves, then drain in-flight requests.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, storage = ?cfg.storage.backend, "artfolio server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("artfolio server drained");
    Ok(())
}
