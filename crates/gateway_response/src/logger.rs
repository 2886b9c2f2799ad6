//!
//! Logging for the decoding layer and its callers.
//!

pub mod config;
mod setup;

pub use tracing::{debug, warn};

pub use self::setup::setup;
