pub mod error;
pub mod window;

pub use error::{LifeError, LifeResult};
