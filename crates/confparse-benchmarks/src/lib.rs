//! confparse benchmarking suite
//!
//! Benchmarks for source parsing and report rendering, plus the input
//! generators they share.

pub mod common;

pub use common::*;
