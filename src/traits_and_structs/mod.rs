pub mod automata_trait;
pub mod cell;

pub use automata_trait::CellAutomata;
pub use cell::Cell;
