//! Host-facing program representation.
//!
//! The analysis never walks the host compiler's own IR. The host extracts
//! each analyzed unit once, into the explicit data model in this module:
//! dense value identities, a closed opcode enumeration, per-value defining
//! operations, and precomputed use-def edges.

pub mod builder;
pub mod function;

pub use builder::*;
pub use function::*;
