// src/config/mod.rs
//! Configuration management for recording generation

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigLoader, ConfigError};
