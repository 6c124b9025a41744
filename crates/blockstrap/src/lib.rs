//! Command-line driver for the blockstrap generator
//!
//! Loads a cleaned return matrix, generates Monte Carlo bootstrap scenarios
//! with `blockstrap_core`, logs a fidelity summary and optionally writes the
//! scenarios to disk.

pub mod data;
pub mod io;
pub mod logging;
pub mod run;

pub use logging::init_logging;
pub use run::{RunOptions, run};
