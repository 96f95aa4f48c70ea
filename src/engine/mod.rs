//! Fixpoint engine.
//!
//! This module contains the worklist scheduler, the per-run fixpoint
//! driver and its phases, analysis limits and configuration, statistics
//! tracking, and result reporting.

pub mod config;
pub mod fixpoint;
pub mod report;
pub mod stats;
pub mod worklist;

pub use config::*;
pub use fixpoint::*;
pub use report::*;
pub use stats::*;
pub use worklist::*;
