//! Wrap-aware integer ranges
//!
//! A [`WrappedRange`] is a closed interval over the finite ring of
//! `bits`-bit integers. When `lo > hi` the interval wraps through the
//! modulus, so `[250, 4]` at 8 bits denotes `{250..=255} ∪ {0..=4}`.
//! This mirrors the semantics of LLVM's `ConstantRange`, minus the empty
//! set (emptiness is represented one level up, by `AbstractValue::Bottom`).

use core::fmt;

/// Widest supported bit width.
pub const MAX_BITS: u32 = 64;

/// A closed, wrap-aware interval over `bits`-bit integers.
///
/// Invariant: `1 <= bits <= 64` and both bounds fit in `bits` bits.
/// Combining ranges of different widths is a programming error in the
/// caller and is rejected by assertion, not by a recoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappedRange {
    lo: u64,
    hi: u64,
    bits: u32,
}

impl WrappedRange {
    /// Create a range with explicit bounds.
    ///
    /// `lo > hi` is allowed and denotes a wrapping interval.
    pub fn new(lo: u64, hi: u64, bits: u32) -> Self {
        assert!(bits >= 1 && bits <= MAX_BITS, "invalid bit width {}", bits);
        let mask = Self::width_mask(bits);
        assert!(lo <= mask && hi <= mask, "bounds exceed width {}", bits);
        Self { lo, hi, bits }
    }

    /// Exact singleton range for a constant (masked to width).
    pub fn constant(val: u64, bits: u32) -> Self {
        assert!(bits >= 1 && bits <= MAX_BITS, "invalid bit width {}", bits);
        let val = val & Self::width_mask(bits);
        Self { lo: val, hi: val, bits }
    }

    /// The full ring `[0, 2^bits - 1]`, the least precise non-empty range.
    pub fn full(bits: u32) -> Self {
        assert!(bits >= 1 && bits <= MAX_BITS, "invalid bit width {}", bits);
        Self {
            lo: 0,
            hi: Self::width_mask(bits),
            bits,
        }
    }

    fn width_mask(bits: u32) -> u64 {
        if bits == 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        }
    }

    fn ring_size(bits: u32) -> u128 {
        1u128 << bits
    }

    /// Inclusive lower bound.
    pub fn lo(&self) -> u64 {
        self.lo
    }

    /// Inclusive upper bound.
    pub fn hi(&self) -> u64 {
        self.hi
    }

    /// Bit width of the described value.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether the interval wraps through the modulus.
    pub fn is_wrapped(&self) -> bool {
        self.lo > self.hi
    }

    /// Whether this is the full ring.
    pub fn is_full(&self) -> bool {
        self.hi.wrapping_sub(self.lo) & Self::width_mask(self.bits) == Self::width_mask(self.bits)
    }

    /// Whether this is a single point.
    pub fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    /// The point value, if this is a singleton.
    pub fn singleton(&self) -> Option<u64> {
        if self.is_singleton() {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Number of values in the interval.
    pub fn len(&self) -> u128 {
        (self.hi.wrapping_sub(self.lo) & Self::width_mask(self.bits)) as u128 + 1
    }

    /// Ranges are never empty; emptiness lives in `AbstractValue::Bottom`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `val` (taken modulo the width) lies in the interval.
    pub fn contains(&self, val: u64) -> bool {
        let val = val & Self::width_mask(self.bits);
        if self.is_wrapped() {
            val >= self.lo || val <= self.hi
        } else {
            val >= self.lo && val <= self.hi
        }
    }

    /// Subset test: whether every value of `other` lies in `self`.
    ///
    /// This is the partial order of the range lattice.
    pub fn contains_range(&self, other: &Self) -> bool {
        assert_eq!(self.bits, other.bits, "bit width mismatch in range order");
        if self.is_full() {
            return true;
        }
        if other.is_full() {
            return false;
        }
        match (self.is_wrapped(), other.is_wrapped()) {
            // Both plain intervals.
            (false, false) => self.lo <= other.lo && other.hi <= self.hi,
            // A plain interval never covers a wrapping one.
            (false, true) => false,
            // The plain interval must fit one arm of the wrapping one.
            (true, false) => other.hi <= self.hi || other.lo >= self.lo,
            // Arm by arm.
            (true, true) => other.hi <= self.hi && other.lo >= self.lo,
        }
    }

    /// Smallest wrap-aware interval containing `a + b` for all `a` in
    /// `self` and `b` in `other`, under modular arithmetic.
    pub fn wrapping_add(&self, other: &Self) -> Self {
        assert_eq!(self.bits, other.bits, "bit width mismatch in range add");
        // The sums form a contiguous modular interval of |a| + |b| - 1
        // values; once that covers the ring, nothing is known.
        let span = self.len() + other.len() - 1;
        if span >= Self::ring_size(self.bits) {
            return Self::full(self.bits);
        }
        let mask = Self::width_mask(self.bits);
        Self {
            lo: self.lo.wrapping_add(other.lo) & mask,
            hi: self.hi.wrapping_add(other.hi) & mask,
            bits: self.bits,
        }
    }

    /// Smallest wrap-aware interval containing `a - b` for all `a` in
    /// `self` and `b` in `other`, under modular arithmetic.
    pub fn wrapping_sub(&self, other: &Self) -> Self {
        assert_eq!(self.bits, other.bits, "bit width mismatch in range sub");
        let span = self.len() + other.len() - 1;
        if span >= Self::ring_size(self.bits) {
            return Self::full(self.bits);
        }
        let mask = Self::width_mask(self.bits);
        Self {
            lo: self.lo.wrapping_sub(other.hi) & mask,
            hi: self.hi.wrapping_sub(other.lo) & mask,
            bits: self.bits,
        }
    }
}

impl fmt::Display for WrappedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full() {
            write!(f, "full i{}", self.bits)
        } else if let Some(val) = self.singleton() {
            write!(f, "{} i{}", val, self.bits)
        } else {
            write!(f, "[{}, {}] i{}", self.lo, self.hi, self.bits)
        }
    }
}
