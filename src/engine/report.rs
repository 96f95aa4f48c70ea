//! Result reporting
//!
//! Thin formatting layer over a converged run: singletons print as the
//! point value, other ranges as interval bounds plus bit width, untracked
//! values as "<no result>". Purely a consumer of the final store.

use core::fmt::Write;

use crate::domain::value::AbstractValue;
use crate::engine::fixpoint::AnalysisResults;
use crate::ir::function::{FunctionBody, ValueDef, ValueId, ValueType};
use crate::stdlib::String;

/// Format a final abstract value for diagnostics.
pub fn fmt_abstract(av: &AbstractValue) -> String {
    let mut s = String::new();
    match av {
        AbstractValue::Bottom => s.push_str("<no result>"),
        AbstractValue::Range(r) => {
            if let Some(val) = r.singleton() {
                write!(s, "{}", val).unwrap();
            } else if r.is_full() {
                write!(s, "full i{}", r.bits()).unwrap();
            } else {
                write!(s, "[{}, {}] i{}", r.lo(), r.hi(), r.bits()).unwrap();
            }
        }
    }
    s
}

/// Format the defining operation of a value.
pub fn fmt_def(func: &FunctionBody, id: ValueId) -> String {
    let mut s = String::new();
    write!(s, "{}", id).unwrap();
    match func.value_type(id) {
        ValueType::Int { bits } => write!(s, ": i{}", bits).unwrap(),
        ValueType::Other => s.push_str(": other"),
    }
    match func.def(id) {
        ValueDef::Argument => s.push_str(" = arg"),
        ValueDef::Constant(val) => write!(s, " = const {}", val).unwrap(),
        ValueDef::Binary { op, lhs, rhs } => {
            write!(s, " = {} {}, {}", op.name(), lhs, rhs).unwrap();
        }
        ValueDef::Opaque => s.push_str(" = opaque"),
    }
    s
}

/// One report line: the defining operation and its final abstract value.
pub fn fmt_value(func: &FunctionBody, id: ValueId, av: &AbstractValue) -> String {
    let mut s = fmt_def(func, id);
    s.push_str(" ; ");
    s.push_str(&fmt_abstract(av));
    s
}

/// Render the whole per-function report, one value per line in program
/// order.
pub fn render(func: &FunctionBody, results: &AnalysisResults) -> String {
    let mut out = String::new();
    for id in func.ids() {
        out.push_str(&fmt_value(func, id, &results.query(id)));
        out.push('\n');
    }
    out
}
