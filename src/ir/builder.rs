//! Function body construction and validation
//!
//! The builder is the seam between the host compiler and the analysis:
//! the host pushes values in its stable program order and all
//! host-integration errors (dangling operand references, width
//! disagreements, non-integer operands) are caught in [`FunctionBuilder::build`],
//! before the engine ever runs. The engine itself treats such conditions
//! as unreachable.
//!
//! Operands may be forward references: a binary operation can name a
//! value the host pushes later. Lazy synthesis in the value store makes
//! the analysis insensitive to presentation order.

use crate::core::error::{AnalysisError, Result};
use crate::domain::range::MAX_BITS;
use crate::engine::config::DEFAULT_MAX_VALUES;
use crate::ir::function::{FunctionBody, OpKind, ValueDef, ValueId, ValueInfo, ValueType};
use crate::stdlib::{vec, Vec};

/// Incremental builder for a [`FunctionBody`].
#[derive(Debug, Default)]
pub struct FunctionBuilder {
    values: Vec<ValueInfo>,
}

impl FunctionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values pushed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values have been pushed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn next_id(&self) -> Result<ValueId> {
        if self.values.len() >= DEFAULT_MAX_VALUES {
            return Err(AnalysisError::TooManyValues(self.values.len()));
        }
        Ok(ValueId::new(self.values.len() as u32))
    }

    fn check_bits(bits: u32) -> Result<()> {
        if bits < 1 || bits > MAX_BITS {
            return Err(AnalysisError::InvalidBitWidth(bits));
        }
        Ok(())
    }

    /// Push a formal parameter.
    pub fn add_arg(&mut self, ty: ValueType) -> Result<ValueId> {
        if let Some(bits) = ty.bits() {
            Self::check_bits(bits)?;
        }
        let id = self.next_id()?;
        self.values.push(ValueInfo {
            ty,
            def: ValueDef::Argument,
        });
        Ok(id)
    }

    /// Push a literal integer constant.
    pub fn add_constant(&mut self, val: u64, bits: u32) -> Result<ValueId> {
        Self::check_bits(bits)?;
        let id = self.next_id()?;
        self.values.push(ValueInfo {
            ty: ValueType::Int { bits },
            def: ValueDef::Constant(val),
        });
        Ok(id)
    }

    /// Push a binary integer operation of the given result width.
    ///
    /// Operands may refer to values not pushed yet; existence, integer
    /// typing, and width agreement are validated in [`Self::build`].
    pub fn add_binary(&mut self, op: OpKind, bits: u32, lhs: ValueId, rhs: ValueId) -> Result<ValueId> {
        Self::check_bits(bits)?;
        let id = self.next_id()?;
        self.values.push(ValueInfo {
            ty: ValueType::Int { bits },
            def: ValueDef::Binary { op, lhs, rhs },
        });
        Ok(id)
    }

    /// Push a value defined by an operation the analysis does not model
    /// (call results, loads, anything non-binary).
    pub fn add_opaque(&mut self, ty: ValueType) -> Result<ValueId> {
        if let Some(bits) = ty.bits() {
            Self::check_bits(bits)?;
        }
        let id = self.next_id()?;
        self.values.push(ValueInfo {
            ty,
            def: ValueDef::Opaque,
        });
        Ok(id)
    }

    fn validate_operand(&self, value: ValueId, operand: ValueId, bits: u32) -> Result<()> {
        let info = self
            .values
            .get(operand.index())
            .ok_or(AnalysisError::UnknownValue(operand.raw()))?;
        let operand_bits = info.ty.bits().ok_or(AnalysisError::NonIntegerOperand {
            value: value.raw(),
            operand: operand.raw(),
        })?;
        if operand_bits != bits {
            return Err(AnalysisError::WidthMismatch {
                lhs_bits: bits,
                rhs_bits: operand_bits,
            });
        }
        Ok(())
    }

    /// Finish the body: validate every operand reference and compute
    /// use-def edges.
    pub fn build(self) -> Result<FunctionBody> {
        if self.values.is_empty() {
            return Err(AnalysisError::EmptyFunction);
        }

        let mut users: Vec<Vec<ValueId>> = vec![Vec::new(); self.values.len()];
        for (idx, info) in self.values.iter().enumerate() {
            let id = ValueId::new(idx as u32);
            if let (Some((lhs, rhs)), Some(bits)) = (info.def.operands(), info.ty.bits()) {
                self.validate_operand(id, lhs, bits)?;
                self.validate_operand(id, rhs, bits)?;
                users[lhs.index()].push(id);
                // A value used twice by one definition still gets one
                // entry per operand; the worklist deduplicates.
                users[rhs.index()].push(id);
            }
        }

        Ok(FunctionBody::from_parts(self.values, users))
    }
}
