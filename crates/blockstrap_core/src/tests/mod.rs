//! Integration tests for the bootstrap generator
//!
//! Tests are organized by topic:
//! - `series` - Single-series bootstrap properties (length, provenance, noise)
//! - `portfolio` - Matrix bootstrap, determinism and column independence
//! - `scenarios` - Monte Carlo scenario sets and their summaries

mod common;
