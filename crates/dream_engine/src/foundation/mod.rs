//! Shared building blocks for the scene code
//!
//! - `math`: vector alias and constructors
//! - `logging`: `log` macros and `env_logger` setup
//! - `random`: placement sampling over a borrowed RNG

pub mod math;
pub mod logging;
pub mod random;
