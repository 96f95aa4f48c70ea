// SPDX-License-Identifier: GPL-2.0
//! Integration tests for the range analysis
//!
//! These tests drive whole functions from the builder through the
//! fixpoint engine and check final values, statistics, and the
//! rendered report together.

use range_analysis::prelude::*;

/// Helper to build, analyze, and return the converged results.
fn analyze_built(b: FunctionBuilder) -> (FunctionBody, AnalysisResults) {
    let func = b.build().unwrap();
    let results = analyze(&func).unwrap();
    (func, results)
}

// ============================================================================
// Whole-function scenarios
// ============================================================================

#[test]
fn test_mixed_function() {
    // a: i8 = arg            -> full
    // k: i8 = const 250      -> 250
    // s: i8 = add k, k       -> 244 (500 mod 256)
    // d: i8 = sub k, s       -> 6
    // m: i8 = mul d, k       -> full (unmodeled)
    // p: other = opaque      -> <no result>
    let mut b = FunctionBuilder::new();
    let a = b.add_arg(ValueType::Int { bits: 8 }).unwrap();
    let k = b.add_constant(250, 8).unwrap();
    let s = b.add_binary(OpKind::Add, 8, k, k).unwrap();
    let d = b.add_binary(OpKind::Sub, 8, k, s).unwrap();
    let m = b.add_binary(OpKind::Mul, 8, d, k).unwrap();
    let p = b.add_opaque(ValueType::Other).unwrap();
    let (_, results) = analyze_built(b);

    assert_eq!(results.query(a), AbstractValue::full(8));
    assert_eq!(results.query(k).singleton(), Some(250));
    assert_eq!(results.query(s).singleton(), Some(244));
    assert_eq!(results.query(d).singleton(), Some(6));
    assert_eq!(results.query(m), AbstractValue::full(8));
    assert!(results.query(p).is_bottom());
}

#[test]
fn test_widths_are_independent() {
    // The same arithmetic wraps at i8 but stays exact at i16.
    let mut narrow = FunctionBuilder::new();
    let a8 = narrow.add_constant(200, 8).unwrap();
    let b8 = narrow.add_constant(100, 8).unwrap();
    let s8 = narrow.add_binary(OpKind::Add, 8, a8, b8).unwrap();
    let (_, r8) = analyze_built(narrow);

    let mut wide = FunctionBuilder::new();
    let a16 = wide.add_constant(200, 16).unwrap();
    let b16 = wide.add_constant(100, 16).unwrap();
    let s16 = wide.add_binary(OpKind::Add, 16, a16, b16).unwrap();
    let (_, r16) = analyze_built(wide);

    assert_eq!(r8.query(s8).singleton(), Some(44));
    assert_eq!(r16.query(s16).singleton(), Some(300));
}

#[test]
fn test_deep_constant_chain() {
    // 64 increments of an i64 constant stay exact end to end.
    let mut b = FunctionBuilder::new();
    let one = b.add_constant(1, 64).unwrap();
    let mut last = b.add_constant(0, 64).unwrap();
    for _ in 0..64 {
        last = b.add_binary(OpKind::Add, 64, last, one).unwrap();
    }
    let (func, results) = analyze_built(b);

    assert_eq!(results.query(last).singleton(), Some(64));
    // Every value got a seed; the instruction ones each got at least
    // one recomputation.
    assert_eq!(results.stats().values_seeded, func.len());
    assert!(results.stats().items_popped >= 64);
}

#[test]
fn test_sixty_four_bit_wrap() {
    let mut b = FunctionBuilder::new();
    let max = b.add_constant(u64::MAX, 64).unwrap();
    let one = b.add_constant(1, 64).unwrap();
    let wrapped = b.add_binary(OpKind::Add, 64, max, one).unwrap();
    let (_, results) = analyze_built(b);
    assert_eq!(results.query(wrapped).singleton(), Some(0));
}

#[test]
fn test_one_bit_arithmetic() {
    // Booleans: 1 + 1 wraps to 0 at a single bit.
    let mut b = FunctionBuilder::new();
    let one = b.add_constant(1, 1).unwrap();
    let sum = b.add_binary(OpKind::Add, 1, one, one).unwrap();
    let (_, results) = analyze_built(b);
    assert_eq!(results.query(sum).singleton(), Some(0));
}

// ============================================================================
// Reporting and logging end to end
// ============================================================================

#[test]
fn test_report_matches_queries() {
    let mut b = FunctionBuilder::new();
    let a = b.add_arg(ValueType::Int { bits: 32 }).unwrap();
    let k = b.add_constant(7, 32).unwrap();
    b.add_binary(OpKind::Add, 32, a, k).unwrap();
    let (func, results) = analyze_built(b);

    let report = results.render(&func);
    assert_eq!(report.lines().count(), func.len());
    assert!(report.contains("v1: i32 = const 7 ; 7"));
    assert!(report.contains("v2: i32 = add v0, v1 ; full i32"));
}

#[test]
fn test_forward_references_converge_exactly() {
    // Operands defined later in program order resolve through lazy
    // synthesis; the run converges to the same exact values as the
    // in-order presentation, with no residual updates in the drain.
    let mut b = FunctionBuilder::new();
    let outer = b
        .add_binary(OpKind::Add, 8, ValueId::new(1), ValueId::new(2))
        .unwrap();
    let inner = b
        .add_binary(OpKind::Add, 8, ValueId::new(2), ValueId::new(2))
        .unwrap();
    let one = b.add_constant(1, 8).unwrap();
    let func = b.build().unwrap();

    let config = AnalysisConfig::with_log_level(LogLevel::Debug);
    let results = analyze_with_config(&func, config).unwrap();
    assert_eq!(results.query(one).singleton(), Some(1));
    assert_eq!(results.query(inner).singleton(), Some(2));
    assert_eq!(results.query(outer).singleton(), Some(3));
    // Debug only records post-seed changes, and there are none.
    assert_eq!(results.stats().updates, 0);
    assert!(results.log().contents().contains("converged"));
    assert!(!results.log().contents().contains("update v"));
}

#[test]
fn test_default_run_logs_nothing() {
    let mut b = FunctionBuilder::new();
    b.add_constant(1, 8).unwrap();
    let (_, results) = analyze_built(b);
    assert!(results.log().is_empty());
}

// ============================================================================
// Malformed input end to end
// ============================================================================

#[test]
fn test_builder_errors_are_malformed_input() {
    let mut b = FunctionBuilder::new();
    let a = b.add_constant(1, 8).unwrap();
    b.add_binary(OpKind::Add, 8, a, ValueId::new(42)).unwrap();
    let err = b.build().unwrap_err();
    assert!(err.is_malformed_input());

    let empty = FunctionBuilder::new().build().unwrap_err();
    assert!(empty.is_malformed_input());
}
