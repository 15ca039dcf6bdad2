use crate::cell::CellState;
use crate::grid::{Board, Position};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],    // (x, y)
}

// Laid out to fit the default 20x20 board.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(9, 10), (10, 10), (11, 10)],
    },
    Pattern {
        name: "Toad",
        cells: &[(10, 9), (11, 9), (12, 9), (9, 10), (10, 10), (11, 10)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(6, 6), (7, 6), (6, 7), (7, 7), (8, 8), (9, 8), (8, 9), (9, 9)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(10, 9), (11, 9), (9, 10), (10, 10), (10, 11)],
    },
];

/// Case-insensitive lookup by name.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

impl Board {
    /// Empty board with `pattern` stamped on; cells outside the board are dropped.
    pub fn from_pattern(size: u32, pattern: &Pattern) -> Self {
        let mut board = Board::empty(size);
        for &(x, y) in pattern.cells {
            board.set(Position::new(x, y), CellState::Alive);
        }
        board
    }
}
