// SPDX-License-Identifier: GPL-2.0
//! Tests for range_analysis::engine::worklist

use range_analysis::prelude::*;

#[test]
fn test_starts_empty() {
    let wl = Worklist::new(8);
    assert!(wl.is_empty());
    assert_eq!(wl.len(), 0);
}

#[test]
fn test_fifo_discipline() {
    let mut wl = Worklist::new(8);
    for raw in [5u32, 1, 3] {
        wl.push(ValueId::new(raw));
    }
    assert_eq!(wl.pop(), Some(ValueId::new(5)));
    assert_eq!(wl.pop(), Some(ValueId::new(1)));
    assert_eq!(wl.pop(), Some(ValueId::new(3)));
    assert!(wl.is_empty());
}

#[test]
fn test_duplicate_push_while_pending_is_noop() {
    let mut wl = Worklist::new(4);
    assert!(wl.push(ValueId::new(2)));
    assert!(wl.is_pending(ValueId::new(2)));
    assert!(!wl.push(ValueId::new(2)));
    assert_eq!(wl.len(), 1);
}

#[test]
fn test_repush_after_pop_allowed() {
    let mut wl = Worklist::new(4);
    wl.push(ValueId::new(0));
    assert_eq!(wl.pop(), Some(ValueId::new(0)));
    assert!(!wl.is_pending(ValueId::new(0)));
    assert!(wl.push(ValueId::new(0)));
}

#[test]
fn test_peak_len_tracks_high_water_mark() {
    let mut wl = Worklist::new(8);
    wl.push(ValueId::new(0));
    wl.push(ValueId::new(1));
    wl.push(ValueId::new(2));
    while wl.pop().is_some() {}
    wl.push(ValueId::new(3));
    assert_eq!(wl.peak_len(), 3);
}
