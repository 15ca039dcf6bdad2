// grid.rs - Grid types for the per-cell Game of Life board

use rand::Rng;

use crate::cell::CellState;

pub const DEFAULT_GRID_SIZE: u32 = 20;                // 20x20 playing area
pub const DEFAULT_DENSITY: f64 = 0.3;                 // ~30% alive on a random board

/// Moore neighborhood offsets, row above, same row, row below.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Neighbors of `pos` on a `size`x`size` board, `None` where the neighbor
/// falls off the edge. No wrap-around.
pub fn neighbor_positions(pos: Position, size: u32) -> [Option<Position>; 8] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| {
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        let inside = (0..size as i64).contains(&x) && (0..size as i64).contains(&y);
        inside.then(|| Position::new(x as u32, y as u32))
    })
}

/// Initial board handed to the browser. The server keeps nothing after
/// rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u32,
    cells: Vec<CellState>,
}

impl Board {
    pub fn empty(size: u32) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; (size * size) as usize],
        }
    }

    /// Each cell alive with probability `density` (clamped to 0..=1, NaN
    /// counts as 0).
    pub fn random<R: Rng>(size: u32, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..size * size)
            .map(|_| CellState::from_alive(rng.random_bool(density)))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Out-of-range positions are ignored.
    pub fn set(&mut self, pos: Position, state: CellState) {
        if pos.x < self.size && pos.y < self.size {
            self.cells[(pos.y * self.size + pos.x) as usize] = state;
        }
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major iteration over every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new(i as u32 % size, i as u32 / size), c))
    }
}
