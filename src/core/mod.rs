//! Core support types for the analysis.
//!
//! This module contains the error taxonomy and the in-memory analysis log.

pub mod error;
pub mod log;

pub use error::*;
pub use log::*;
