pub mod beatmap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod state;
pub mod store;

pub use error::{LazerSetsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ROOT_MISSING: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
