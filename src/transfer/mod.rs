//! Per-opcode transfer functions.
//!
//! A transfer function maps operand abstract values to a result abstract
//! value. The library is strict on `Bottom` and degrades every unmodeled
//! opcode to the full range, so precision loss is never an error.

pub mod ops;

pub use ops::*;
