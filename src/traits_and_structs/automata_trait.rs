use super::cell::Cell;

pub trait CellAutomata {
    /// Flips a cell and returns whether it is now alive.
    fn toggle(&mut self, cell: Cell) -> bool;
    fn set(&mut self, cell: Cell, alive: bool);
    fn clear(&mut self);
    fn update(&mut self);
    fn describe() -> String;
}
