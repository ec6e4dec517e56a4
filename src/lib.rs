// src/lib.rs

pub mod config;
pub mod core;
pub mod grid;
pub mod integer_math;
pub mod io;
pub mod template;

pub use log;

pub use crate::core::{KitError, Result};
