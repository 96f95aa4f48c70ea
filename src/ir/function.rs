//! Analyzed function bodies
//!
//! A [`FunctionBody`] holds every program value of one analyzed unit in
//! stable program order, together with the use-def edges the fixpoint
//! engine walks when re-enqueueing dependents. Bodies are immutable once
//! built; see [`crate::ir::builder::FunctionBuilder`].

use core::fmt;

use crate::stdlib::Vec;

/// Stable, dense identity of a program value within one function.
///
/// Identities double as indices into the per-function value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueId(u32);

impl ValueId {
    /// Create an identity from a raw index.
    pub fn new(raw: u32) -> Self {
        ValueId(raw)
    }

    /// The raw index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw u32 value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Declared type category of a program value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Integer of the given bit width.
    Int {
        /// Bit width, `1..=64`.
        bits: u32,
    },
    /// Anything else (pointers, floats, aggregates); untracked.
    Other,
}

impl ValueType {
    /// Whether this is an integer type.
    pub fn is_int(&self) -> bool {
        matches!(self, ValueType::Int { .. })
    }

    /// The bit width, if integer-typed.
    pub fn bits(&self) -> Option<u32> {
        match self {
            ValueType::Int { bits } => Some(*bits),
            ValueType::Other => None,
        }
    }
}

/// Closed enumeration of binary integer opcodes.
///
/// Only `Add` and `Sub` carry a modeled transfer function in the baseline
/// analysis; every other opcode degrades to the full range at the result
/// width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Shl,
    Lshr,
    Ashr,
}

impl OpKind {
    /// Mnemonic for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Div => "div",
            OpKind::And => "and",
            OpKind::Or => "or",
            OpKind::Xor => "xor",
            OpKind::Shl => "shl",
            OpKind::Lshr => "lshr",
            OpKind::Ashr => "ashr",
        }
    }

    /// Whether the baseline transfer set models this opcode.
    pub fn is_modeled(&self) -> bool {
        matches!(self, OpKind::Add | OpKind::Sub)
    }
}

/// How a program value is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDef {
    /// Formal parameter: an unconstrained input.
    Argument,
    /// Literal constant with its exact payload (masked to width).
    Constant(u64),
    /// Result of a binary integer operation.
    Binary {
        /// Opcode.
        op: OpKind,
        /// First operand.
        lhs: ValueId,
        /// Second operand.
        rhs: ValueId,
    },
    /// Result of an operation the analysis does not model at all
    /// (calls, loads, non-binary instructions).
    Opaque,
}

impl ValueDef {
    /// Whether the value is defined by an instruction (and therefore gets
    /// seeded onto the worklist), as opposed to an argument or constant.
    pub fn is_instruction(&self) -> bool {
        matches!(self, ValueDef::Binary { .. } | ValueDef::Opaque)
    }

    /// The operands read by this definition, if any.
    pub fn operands(&self) -> Option<(ValueId, ValueId)> {
        match self {
            ValueDef::Binary { lhs, rhs, .. } => Some((*lhs, *rhs)),
            _ => None,
        }
    }
}

/// One program value: its type and defining operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueInfo {
    /// Declared type category.
    pub ty: ValueType,
    /// Defining operation.
    pub def: ValueDef,
}

/// One analyzed unit: values in program order plus use-def edges.
#[derive(Debug, Clone)]
pub struct FunctionBody {
    values: Vec<ValueInfo>,
    // users[i] lists every value whose definition reads value i.
    users: Vec<Vec<ValueId>>,
}

impl FunctionBody {
    pub(crate) fn from_parts(values: Vec<ValueInfo>, users: Vec<Vec<ValueId>>) -> Self {
        debug_assert_eq!(values.len(), users.len());
        Self { values, users }
    }

    /// Number of program values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the function holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All value identities, in stable program order.
    pub fn ids(&self) -> impl Iterator<Item = ValueId> + '_ {
        (0..self.values.len() as u32).map(ValueId::new)
    }

    /// Full value record.
    pub fn value(&self, id: ValueId) -> &ValueInfo {
        &self.values[id.index()]
    }

    /// Declared type of a value.
    pub fn value_type(&self, id: ValueId) -> ValueType {
        self.values[id.index()].ty
    }

    /// Defining operation of a value.
    pub fn def(&self, id: ValueId) -> ValueDef {
        self.values[id.index()].def
    }

    /// Direct dependents of a value: every value whose definition reads it.
    pub fn users(&self, id: ValueId) -> &[ValueId] {
        &self.users[id.index()]
    }
}
