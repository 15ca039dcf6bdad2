// cell.rs - Cell state and its wire token ("1" alive, "0" dead)

use thiserror::Error;

pub const ALIVE_TOKEN: &str = "1";
pub const DEAD_TOKEN: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCellError {
    #[error("invalid cell state token {0:?}, expected \"1\" or \"0\"")]
    InvalidToken(String),
}

/// A single cell of the board. Always exactly one of the two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    /// Parse a state token. Surrounding whitespace is ignored; anything
    /// other than "1" or "0" is rejected, including the empty string.
    pub fn from_token(token: &str) -> Result<Self, ParseCellError> {
        match token.trim() {
            ALIVE_TOKEN => Ok(CellState::Alive),
            DEAD_TOKEN  => Ok(CellState::Dead),
            other       => Err(ParseCellError::InvalidToken(other.to_string())),
        }
    }

    pub const fn as_token(self) -> &'static str {
        match self {
            CellState::Alive => ALIVE_TOKEN,
            CellState::Dead  => DEAD_TOKEN,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// B3/S23: a live cell survives on 2 or 3 live neighbors, a dead cell
    /// is born on exactly 3, everything else is dead next round.
    pub const fn evolve(self, alive_neighbors: usize) -> Self {
        match (self, alive_neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,   // Survival
            (CellState::Dead, 3)      => CellState::Alive,   // Birth
            _                         => CellState::Dead,    // Death or stays dead
        }
    }
}

/// Empty entries stand in for off-grid or unrendered neighbors.
pub fn is_placeholder(token: &str) -> bool {
    token.trim().is_empty()
}
