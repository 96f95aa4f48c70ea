//! Transfer functions for binary integer operations
//!
//! The baseline set models addition and subtraction as modular Minkowski
//! sums/differences of the operand ranges. Everything else yields the full
//! range at the result width: still sound (every concrete value is
//! covered), just without precision.

use crate::domain::value::AbstractValue;
use crate::ir::function::OpKind;

/// Apply the transfer function for `op` to two operand abstractions.
///
/// `bits` is the bit width of the result value. The operands are assumed
/// to be integer abstractions of the same width; the builder layer rejects
/// anything else, so a mismatch here is asserted, not reported.
///
/// Any `Bottom` operand is absorbing: nothing can be concluded about an
/// operation over an unresolved input.
pub fn apply(op: OpKind, lhs: &AbstractValue, rhs: &AbstractValue, bits: u32) -> AbstractValue {
    let (l, r) = match (lhs.range(), rhs.range()) {
        (Some(l), Some(r)) => (l, r),
        _ => return AbstractValue::Bottom,
    };

    debug_assert_eq!(l.bits(), bits, "operand width disagrees with result");
    debug_assert_eq!(r.bits(), bits, "operand width disagrees with result");

    match op {
        OpKind::Add => AbstractValue::Range(l.wrapping_add(r)),
        OpKind::Sub => AbstractValue::Range(l.wrapping_sub(r)),
        _ => AbstractValue::full(bits),
    }
}
