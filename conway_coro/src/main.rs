// main.rs - Async Conway's Game of Life server, one coroutine per cell update

use anyhow::{Context, Result};
use clap::Parser;
use conway_coro::Config;
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let app = conway_coro::app(&config).context("invalid configuration")?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        "Server running on http://{addr} ({0}x{0} board, {1}ms pace)",
        config.grid_size, config.pace_ms
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
