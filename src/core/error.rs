//! Error types for the range analysis

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = core::result::Result<T, AnalysisError>;

/// Errors that can occur while building or analyzing a function.
///
/// Precision loss is never an error: unmodeled operations degrade to the
/// full range at the value's bit width. Errors are reserved for broken
/// host integration (malformed function bodies) and exhausted limits.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum AnalysisError {
    #[cfg_attr(feature = "std", error("empty function"))]
    EmptyFunction,

    #[cfg_attr(feature = "std", error("too many values: {0}"))]
    TooManyValues(usize),

    #[cfg_attr(feature = "std", error("unknown value v{0}"))]
    UnknownValue(u32),

    #[cfg_attr(
        feature = "std",
        error("operand v{operand} of v{value} is not integer-typed")
    )]
    NonIntegerOperand { value: u32, operand: u32 },

    #[cfg_attr(
        feature = "std",
        error("bit width mismatch: {lhs_bits} vs {rhs_bits}")
    )]
    WidthMismatch { lhs_bits: u32, rhs_bits: u32 },

    #[cfg_attr(feature = "std", error("invalid bit width {0}"))]
    InvalidBitWidth(u32),

    #[cfg_attr(feature = "std", error("iteration limit exceeded: {0}"))]
    IterationLimitExceeded(usize),

    #[cfg_attr(feature = "std", error("analysis has not converged"))]
    NotConverged,
}

// Manual Display implementation for no_std
#[cfg(not(feature = "std"))]
impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyFunction => write!(f, "empty function"),
            AnalysisError::TooManyValues(n) => write!(f, "too many values: {}", n),
            AnalysisError::UnknownValue(v) => write!(f, "unknown value v{}", v),
            AnalysisError::NonIntegerOperand { value, operand } => {
                write!(f, "operand v{} of v{} is not integer-typed", operand, value)
            }
            AnalysisError::WidthMismatch { lhs_bits, rhs_bits } => {
                write!(f, "bit width mismatch: {} vs {}", lhs_bits, rhs_bits)
            }
            AnalysisError::InvalidBitWidth(bits) => write!(f, "invalid bit width {}", bits),
            AnalysisError::IterationLimitExceeded(n) => {
                write!(f, "iteration limit exceeded: {}", n)
            }
            AnalysisError::NotConverged => write!(f, "analysis has not converged"),
        }
    }
}

impl AnalysisError {
    /// Check whether this error indicates a malformed function body
    /// (as opposed to an exhausted analysis limit).
    pub fn is_malformed_input(&self) -> bool {
        !matches!(
            self,
            AnalysisError::IterationLimitExceeded(_) | AnalysisError::NotConverged
        )
    }
}
