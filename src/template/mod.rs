// src/template/mod.rs

pub mod launch;
pub mod runner;

pub use launch::{init_logger, launch};
pub use runner::{Solve, Template};
