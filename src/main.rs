//! Shop Orders - HTTP entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ InMemoryOrderService │
//! │  (YAML)  │    │  (axum)  │    │  (users/carts/orders)│
//! └──────────┘    └──────────┘    └──────────────────────┘
//! ```
//!
//! Flags: `--env/-e <name>` selects `config/<name>.yaml` (default `dev`),
//! `--port <port>` overrides the configured port.

use std::sync::Arc;

use anyhow::Context;

use shop_orders::config::AppConfig;
use shop_orders::gateway::{self, services::InMemoryOrderService};

/// Value following the first of `aliases` found on the command line
fn arg_value(aliases: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.windows(2)
        .find(|pair| aliases.contains(&pair[0].as_str()))
        .map(|pair| pair[1].clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = arg_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string());
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = shop_orders::logging::init_logging(&app_config);

    tracing::info!("Starting Shop Orders in {} mode", env);

    if let Some(port) = arg_value(&["--port"]) {
        app_config.gateway.port = port
            .parse()
            .with_context(|| format!("Invalid --port value: {}", port))?;
    }

    let order_service = Arc::new(
        InMemoryOrderService::from_seed(&app_config.seed).context("Invalid seed carts")?,
    );

    gateway::run_server(&app_config.gateway, order_service).await
}
