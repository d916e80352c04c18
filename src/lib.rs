//! Randstr - fixed-alphabet random string generation
//!
//! This crate generates fixed-length random strings drawn uniformly from a
//! 52-letter alphabet (uppercase then lowercase Latin letters). It ships as
//! a library plus a small CLI that prints one 40-character string per run.

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod generator;
pub mod setup_tracing;
