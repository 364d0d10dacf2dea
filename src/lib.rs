pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod inference;
pub mod summary;

pub use error::{ReleaseSummaryError, Result};

#[cfg(test)]
pub mod test_helpers;
