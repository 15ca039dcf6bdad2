// coordinator.rs - Per-cell update: wait out the pace, then apply the rule
//
// Every cell is its own request and its own coroutine. There is no global
// tick and no barrier: a cell sleeps, answers, and the browser asks again.

use conway::{CellState, Position, compute_next_state, is_placeholder};
use log::debug;

use crate::error::ServerError;
use crate::pace::Pace;

/// One cell's request: where it is, what it is, what surrounds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub position: Position,
    pub state: String,
    pub neighbors: Vec<String>,
}

impl CellUpdate {
    /// Build from decoded form pairs. `neighbors` may repeat and is also
    /// accepted as `neighbors[]`; unknown keys are ignored.
    pub fn from_fields<I>(position: Position, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut state = String::new();
        let mut neighbors = Vec::new();
        for (key, value) in fields {
            match key.as_str() {
                "state"                    => state = value,
                "neighbors" | "neighbors[]" => neighbors.push(value),
                _                          => {}
            }
        }
        Self { position, state, neighbors }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutcome {
    pub position: Position,
    pub alive: bool,
    /// Event name the page listens on to refresh just this cell.
    pub trigger: String,
}

pub fn trigger_name(pos: Position) -> String {
    format!("update-cell-{}-{}", pos.x, pos.y)
}

/// The pace is read once when the update starts, so a later pace change
/// does not stretch or shorten a sleep that is already running.
pub async fn handle_cell_update(pace: &Pace, update: CellUpdate) -> Result<CellOutcome, ServerError> {
    let delay = pace.get();
    tokio::time::sleep(delay).await;

    debug!(
        "cell ({}, {}) state={:?} neighbors={:?}",
        update.position.x, update.position.y, update.state, update.neighbors
    );

    let neighbors: Vec<&str> = update
        .neighbors
        .iter()
        .map(String::as_str)
        .filter(|n| !is_placeholder(n))
        .collect();

    let next = compute_next_state(&update.state, &neighbors)?;

    Ok(CellOutcome {
        position: update.position,
        alive: next == CellState::Alive.as_token(),
        trigger: trigger_name(update.position),
    })
}
