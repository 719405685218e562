//! Command implementations for the crucible CLI

pub mod seed;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use seed::run_seed;
pub use serve::run_serve;
