pub mod command;
pub mod error;
pub mod geometry;
pub mod math;

pub use error::{PathMorphError, Result};
