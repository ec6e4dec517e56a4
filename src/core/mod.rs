// src/core/mod.rs

pub mod error;
pub mod types;

pub use error::{KitError, Result};
pub use types::*;
