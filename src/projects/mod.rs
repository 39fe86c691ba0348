pub mod cadence;
pub mod life;
pub mod life_engine;
