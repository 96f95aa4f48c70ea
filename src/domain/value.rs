//! Lattice of abstract values
//!
//! An [`AbstractValue`] is either `Bottom` ("no information yet", also the
//! state of untracked non-integer values) or a wrap-aware [`WrappedRange`].
//! The full range at a given width acts as the top element: no abstract
//! value is less precise.
//!
//! Partial order: `Bottom ⊑ Range(r) ⊑ Range(full)`, with ranges ordered
//! by set inclusion. Fixpoint updates are expected to be non-decreasing in
//! this order; the engine detects change by structural equality.

use core::fmt;

use super::range::WrappedRange;

/// An element of the analysis lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbstractValue {
    /// No information yet / untracked value.
    #[default]
    Bottom,
    /// A contiguous, wrap-aware interval at a fixed bit width.
    Range(WrappedRange),
}

impl AbstractValue {
    /// The bottom element.
    pub fn bottom() -> Self {
        AbstractValue::Bottom
    }

    /// Exact singleton range for a literal constant.
    pub fn from_constant(val: u64, bits: u32) -> Self {
        AbstractValue::Range(WrappedRange::constant(val, bits))
    }

    /// The least precise non-bottom value at `bits`: the full ring.
    pub fn full(bits: u32) -> Self {
        AbstractValue::Range(WrappedRange::full(bits))
    }

    /// Whether this is the bottom element.
    pub fn is_bottom(&self) -> bool {
        matches!(self, AbstractValue::Bottom)
    }

    /// The underlying range, if any.
    pub fn range(&self) -> Option<&WrappedRange> {
        match self {
            AbstractValue::Bottom => None,
            AbstractValue::Range(r) => Some(r),
        }
    }

    /// The point value, if this is a singleton range.
    pub fn singleton(&self) -> Option<u64> {
        self.range().and_then(WrappedRange::singleton)
    }

    /// Lattice partial order: `self ⊑ other`.
    ///
    /// Comparing ranges of different bit widths is a programming error
    /// and panics, like every cross-width combination in this domain.
    pub fn le(&self, other: &Self) -> bool {
        match (self, other) {
            (AbstractValue::Bottom, _) => true,
            (AbstractValue::Range(_), AbstractValue::Bottom) => false,
            (AbstractValue::Range(a), AbstractValue::Range(b)) => b.contains_range(a),
        }
    }

    /// Whether a concrete value is covered by this abstraction.
    ///
    /// `Bottom` covers nothing.
    pub fn contains(&self, val: u64) -> bool {
        match self {
            AbstractValue::Bottom => false,
            AbstractValue::Range(r) => r.contains(val),
        }
    }
}

impl From<WrappedRange> for AbstractValue {
    fn from(r: WrappedRange) -> Self {
        AbstractValue::Range(r)
    }
}

impl fmt::Display for AbstractValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractValue::Bottom => write!(f, "<no result>"),
            AbstractValue::Range(r) => write!(f, "{}", r),
        }
    }
}
