//! getcipher command-line driver.
//!
//! The binary is a thin wrapper around [`cli::run`]; argument handling and
//! file processing live here so they can be tested without spawning a
//! process.

pub mod cli;
pub mod options;
