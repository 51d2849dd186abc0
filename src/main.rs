//! Order Service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Checkout │───▶│   Cart   │───▶│ Payment  │───▶│  Order   │
//! │ Request  │    │ Service  │    │ Service  │    │  Store   │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `order_service [--env dev] [--port 8005]`

use std::sync::Arc;

use anyhow::Context;

use order_service::config::AppConfig;
use order_service::gateway;
use order_service::logging::init_logging;
use order_service::AppState;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config =
        AppConfig::load(&env).with_context(|| format!("loading config for env {:?}", env))?;
    if let Some(port) = get_port_override() {
        app_config.server.port = port;
    }

    let _log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting order-service {} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );
    tracing::info!(
        cart_url = %app_config.upstream.cart_url,
        payment_url = %app_config.upstream.payment_url,
        timeout_ms = app_config.upstream.timeout_ms,
        "upstream services"
    );

    let state = Arc::new(AppState::from_config(&app_config.upstream)?);
    gateway::run_server(&app_config.server, state).await
}
