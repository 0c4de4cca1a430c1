use common::config::{LogConfig, ServerConfig};
use common::logger::init_logging;
use placeholder_server::routes;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let _log_guard = init_logging(&LogConfig::from_env());
    let config = ServerConfig::from_env();

    let addr = config.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("listening on port {}", config.port);

    if let Err(e) = axum::serve(listener, routes()).await {
        tracing::error!("Server crashed: {}", e);
        std::process::exit(1);
    }
}
