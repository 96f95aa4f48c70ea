// SPDX-License-Identifier: GPL-2.0

//! # Sparse integer range analysis
//!
//! A worklist-driven abstract interpretation over an SSA-style program
//! representation. For every integer-typed value the analysis computes a
//! sound over-approximation of its possible runtime values as a single
//! wrap-aware interval at the value's bit width.
//!
//! The host compiler hands the analyzed unit over as a
//! [`ir::function::FunctionBody`] (values in stable program order plus
//! use-def edges); the engine seeds an abstract value per program value and
//! then propagates changes along use-def edges until a fixpoint is reached.
//!
//! ## Module Structure
//!
//! - [`core`]: Error definitions and the analysis log buffer
//! - [`domain`]: The abstract domain (wrap-aware ranges, lattice values)
//! - [`ir`]: The host-facing program representation and builder
//! - [`transfer`]: Per-opcode transfer functions
//! - [`store`]: Abstract value storage, one entry per program value
//! - [`engine`]: Worklist scheduling, fixpoint driver, result reporting

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Re-export alloc types for internal use
#[allow(unused_imports)]
pub(crate) mod stdlib {
    pub use alloc::boxed::Box;
    pub use alloc::collections::VecDeque;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

/// Error definitions and logging
pub mod core;

/// The abstract domain
pub mod domain;

/// Host-facing program representation
pub mod ir;

/// Per-opcode transfer functions
pub mod transfer;

/// Abstract value storage
pub mod store;

/// Fixpoint engine and reporting
pub mod engine;

// ============================================================================
// Prelude - commonly used re-exports
// ============================================================================

/// Commonly used types and traits
pub mod prelude {
    pub use crate::core::error::{AnalysisError, Result};
    pub use crate::core::log::{AnalysisLog, LogLevel};

    pub use crate::domain::range::WrappedRange;
    pub use crate::domain::value::AbstractValue;

    pub use crate::ir::builder::FunctionBuilder;
    pub use crate::ir::function::{FunctionBody, OpKind, ValueDef, ValueId, ValueType};

    pub use crate::store::value_store::ValueStore;

    pub use crate::engine::config::AnalysisConfig;
    pub use crate::engine::fixpoint::{
        analyze, analyze_with_config, AnalysisResults, FixpointEngine,
    };
    pub use crate::engine::stats::EngineStats;
    pub use crate::engine::worklist::Worklist;
}

// Re-export error types at crate root for convenience
pub use crate::core::error::{AnalysisError, Result};
