// src/config/mod.rs

pub mod kit_config;

pub use kit_config::KitConfig;
