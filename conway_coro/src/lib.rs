//! Asynchronous, per-cell Game of Life server.
//!
//! The browser holds the board. Each cell posts its own state and its
//! neighbors' states, waits out the shared pace on the server, and gets its
//! next state back. The only server-side state is the pace itself.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod pace;
pub mod routes;
pub mod ui;

use axum::Router;

pub use config::Config;
pub use coordinator::{CellOutcome, CellUpdate, handle_cell_update};
pub use error::ServerError;
pub use pace::{DEFAULT_PACE_MS, MAX_PACE_MS, MIN_PACE_MS, Pace, PaceError};
pub use routes::{AppState, router};

/// Full application for `config`, static files included.
pub fn app(config: &Config) -> Result<Router, PaceError> {
    let state = AppState::from_config(config)?;
    Ok(routes::router_with_static(state, &config.static_dir))
}
