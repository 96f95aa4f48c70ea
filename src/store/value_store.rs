// SPDX-License-Identifier: GPL-2.0

//! Dense per-function abstract value store
//!
//! Values are kept in an arena indexed by [`ValueId`], one slot per
//! program value. Slots are filled lazily on first read, so the store
//! stays self-consistent even when an operand is reached out of program
//! order. `AbstractValue` is `Copy`; replacing a slot can neither leak
//! nor dangle.

use crate::domain::value::AbstractValue;
use crate::ir::function::{FunctionBody, ValueDef, ValueId, ValueType};
use crate::stdlib::{vec, Vec};
use crate::transfer;

/// Per-run mapping from program value identity to abstract value.
#[derive(Debug, Clone)]
pub struct ValueStore {
    slots: Vec<Option<AbstractValue>>,
}

impl ValueStore {
    /// Create an empty store sized for one function.
    pub fn for_function(func: &FunctionBody) -> Self {
        Self {
            slots: vec![None; func.len()],
        }
    }

    /// Number of slots (equals the function's value count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether a value has been visited (stored) yet.
    pub fn is_visited(&self, id: ValueId) -> bool {
        self.slots[id.index()].is_some()
    }

    /// Read without synthesizing. `None` means never visited.
    pub fn peek(&self, id: ValueId) -> Option<AbstractValue> {
        self.slots[id.index()]
    }

    /// Current abstract value of `id`, synthesizing unvisited entries on
    /// demand.
    ///
    /// Lazy synthesis applies the same classification rule as processing:
    /// constants are exact, arguments and unmodeled definitions are full
    /// range, and a binary value is computed by applying its transfer
    /// function to the recursively fetched operands. The entry is seeded
    /// with `Bottom` before the operands are read, so synthesis
    /// terminates on cyclic use-def chains, which stabilize at `Bottom`
    /// (unreachable).
    pub fn get(&mut self, func: &FunctionBody, id: ValueId) -> AbstractValue {
        if let Some(v) = self.slots[id.index()] {
            return v;
        }
        let bits = func.value_type(id).bits();
        let v = match (func.def(id), bits) {
            (_, None) => AbstractValue::Bottom,
            (ValueDef::Constant(val), Some(bits)) => AbstractValue::from_constant(val, bits),
            (ValueDef::Argument | ValueDef::Opaque, Some(bits)) => AbstractValue::full(bits),
            (ValueDef::Binary { .. }, Some(_)) => {
                self.slots[id.index()] = Some(AbstractValue::Bottom);
                self.evaluate(func, id)
            }
        };
        self.slots[id.index()] = Some(v);
        v
    }

    /// Evaluate the abstract value of `id` from its definition and the
    /// current abstract values of its operands.
    ///
    /// Non-integer values stay untracked at `Bottom`; constants are exact
    /// singletons; arguments and unmodeled definitions are unconstrained
    /// known-integers (full range); binary operations go through the
    /// transfer library.
    pub fn evaluate(&mut self, func: &FunctionBody, id: ValueId) -> AbstractValue {
        let bits = match func.value_type(id) {
            ValueType::Other => return AbstractValue::Bottom,
            ValueType::Int { bits } => bits,
        };
        match func.def(id) {
            ValueDef::Constant(val) => AbstractValue::from_constant(val, bits),
            ValueDef::Argument | ValueDef::Opaque => AbstractValue::full(bits),
            ValueDef::Binary { op, lhs, rhs } => {
                let l = self.get(func, lhs);
                let r = self.get(func, rhs);
                transfer::apply(op, &l, &r, bits)
            }
        }
    }

    /// Replace the entry for `id`, returning whether it changed.
    ///
    /// The returned flag drives worklist propagation; storing an equal
    /// value is a no-op for convergence purposes.
    pub fn set(&mut self, id: ValueId, new: AbstractValue) -> bool {
        let slot = &mut self.slots[id.index()];
        let changed = *slot != Some(new);
        *slot = Some(new);
        changed
    }
}
