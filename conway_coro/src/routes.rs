// routes.rs - HTTP wiring: board page, per-cell updates, pace control

use std::path::Path as FsPath;

use axum::extract::{Path, Query, State};
use axum::http::HeaderName;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Router};
use conway::{Board, DEFAULT_DENSITY, Pattern, Position, find_pattern};
use log::{info, warn};
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::coordinator::{CellUpdate, handle_cell_update};
use crate::error::ServerError;
use crate::pace::{Pace, PaceError, parse_speed};
use crate::ui;

pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

#[derive(Debug, Clone)]
pub struct AppState {
    pub pace: Pace,
    pub grid_size: u32,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, PaceError> {
        Ok(Self {
            pace: Pace::new(config.pace_ms)?,
            grid_size: config.grid_size,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub pattern: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpeedForm {
    #[serde(default)]
    pub speed: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board))
        .route("/cell/{x}/{y}", post(update_cell))
        .route("/speed", post(set_speed))
        .with_state(state)
}

/// `router` plus static files from `static_dir` when that directory exists.
pub fn router_with_static(state: AppState, static_dir: &FsPath) -> Router {
    let app = router(state);
    if static_dir.is_dir() {
        info!("serving static files from {}", static_dir.display());
        app.fallback_service(ServeDir::new(static_dir))
    } else {
        app
    }
}

async fn board(State(state): State<AppState>, Query(query): Query<BoardQuery>) -> Html<String> {
    let pattern = query.pattern.as_deref().and_then(find_pattern);
    if let (Some(name), None) = (query.pattern.as_deref(), pattern) {
        warn!("unknown pattern {name:?}, seeding a random board");
    }
    let board = seed_board(state.grid_size, pattern);
    Html(ui::render_board(&board, pattern, state.pace.millis()))
}

fn seed_board(size: u32, pattern: Option<&Pattern>) -> Board {
    match pattern {
        Some(p) => Board::from_pattern(size, p),
        None    => Board::random(size, DEFAULT_DENSITY, &mut rand::rng()),
    }
}

async fn update_cell(
    State(state): State<AppState>,
    Path((x, y)): Path<(u32, u32)>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ServerError> {
    let update = CellUpdate::from_fields(Position::new(x, y), fields);
    let outcome = handle_cell_update(&state.pace, update).await?;
    Ok((
        [(HX_TRIGGER, outcome.trigger)],
        Html(ui::render_cell(outcome.position, outcome.alive, state.grid_size)),
    ))
}

async fn set_speed(
    State(state): State<AppState>,
    Form(form): Form<SpeedForm>,
) -> Result<Html<String>, ServerError> {
    let accepted = parse_speed(&form.speed)
        .and_then(|ms| state.pace.set(ms))
        .inspect_err(|_| warn!("rejected pace {:?}", form.speed))?;
    info!("pace set to {accepted}ms");
    Ok(Html(ui::render_controls(accepted)))
}
