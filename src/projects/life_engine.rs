#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use log::trace;

use crate::traits_and_structs::{Cell, CellAutomata};

pub type LiveSet = HashSet<Cell>;

/// Which cells may be counted as neighbors (and so be born).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bounds {
    Unbounded,
    /// Columns `0..width`, rows `0..height`.
    Grid { width: i32, height: i32 },
}

impl Bounds {
    pub fn contains(self, cell: Cell) -> bool {
        match self {
            Bounds::Unbounded => true,
            Bounds::Grid { width, height } => {
                (0..width).contains(&cell.col) && (0..height).contains(&cell.row)
            }
        }
    }
}

/// Sparse Game of Life: only the live cells are stored.
///
/// A generation is computed from a read-only view of the current live set into a
/// fresh set, which then replaces the old one in a single move.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    live: LiveSet,
    bounds: Bounds,
    generation: u64,
}

impl LifeEngine {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            live: LiveSet::new(),
            bounds,
            generation: 0,
        }
    }

    pub fn live(&self) -> &LiveSet {
        &self.live
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Number of `step` calls since creation or the last `clear`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moore neighborhood of `cell`, restricted to the engine's bounds.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let bounds = self.bounds;
        cell.moore().filter(move |&n| bounds.contains(n))
    }

    pub fn live_neighbors(&self, cell: Cell) -> usize {
        self.neighbors(cell).filter(|n| self.live.contains(n)).count()
    }

    fn next_state(alive: bool, live_neighbors: usize) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Advances one generation and returns the new live set.
    pub fn step(&mut self) -> &LiveSet {
        let mut candidates: HashSet<Cell> = HashSet::with_capacity(self.live.len() * 9);
        for &cell in &self.live {
            candidates.insert(cell);
            candidates.extend(self.neighbors(cell));
        }

        let next: LiveSet = candidates
            .iter()
            .copied()
            .filter(|&c| Self::next_state(self.live.contains(&c), self.live_neighbors(c)))
            .collect();

        trace!(
            "generation {}: {} candidates, population {} -> {}",
            self.generation + 1,
            candidates.len(),
            self.live.len(),
            next.len()
        );

        self.live = next;
        self.generation += 1;
        &self.live
    }
}

impl CellAutomata for LifeEngine {
    fn toggle(&mut self, cell: Cell) -> bool {
        if self.live.remove(&cell) {
            false
        } else {
            self.live.insert(cell);
            true
        }
    }

    fn set(&mut self, cell: Cell, alive: bool) {
        if alive {
            self.live.insert(cell);
        } else {
            self.live.remove(&cell);
        }
    }

    fn clear(&mut self) {
        self.live.clear();
        self.generation = 0;
    }

    fn update(&mut self) {
        self.step();
    }

    fn describe() -> String {
        "Conway's Game of Life (B3/S23) on a sparse set of live cells.".to_string()
    }
}
