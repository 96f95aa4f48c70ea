//! Abstract value storage.
//!
//! One store is created per analyzed function and owns exactly one
//! abstract value per visited program value.

pub mod value_store;

pub use value_store::*;
