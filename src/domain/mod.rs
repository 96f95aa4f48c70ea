// SPDX-License-Identifier: GPL-2.0

//! The abstract domain of the analysis.
//!
//! This module contains wrap-aware intervals over fixed-width integer rings
//! and the lattice of abstract values built on top of them.

pub mod range;
pub mod value;

pub use range::*;
pub use value::*;
