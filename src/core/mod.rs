//! Crate-wide error, result and logging plumbing

pub mod types;
pub mod error;
pub mod logging;

pub use types::*;
pub use error::Error;
