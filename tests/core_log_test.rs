// SPDX-License-Identifier: GPL-2.0
//! Tests for range_analysis::core::log

use range_analysis::prelude::*;

#[test]
fn test_level_ordering() {
    assert!(LogLevel::Off < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Trace);
}

#[test]
fn test_threshold_filters_messages() {
    let mut log = AnalysisLog::new(LogLevel::Warn);
    log.error("e");
    log.warn("w");
    log.info("i");
    log.trace("t");
    assert_eq!(log.contents(), "e\nw\n");
}

#[test]
fn test_off_is_never_enabled() {
    let log = AnalysisLog::new(LogLevel::Off);
    assert!(!log.enabled(LogLevel::Error));
    assert!(!log.enabled(LogLevel::Off));
}

#[test]
fn test_truncation_is_sticky() {
    let mut log = AnalysisLog::with_max_size(LogLevel::Info, 24);
    log.info("aaaaaaaaaa");
    log.info("bbbbbbbbbbbbbbbbbbbbbb");
    assert!(log.truncated);
    let frozen = log.len();
    log.info("dropped after truncation");
    assert_eq!(log.len(), frozen);
}

#[test]
fn test_clear_resets_truncation() {
    let mut log = AnalysisLog::with_max_size(LogLevel::Info, 24);
    log.info("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    assert!(log.truncated);
    log.clear();
    assert!(!log.truncated);
    assert!(log.is_empty());
    log.info("ok");
    assert_eq!(log.contents(), "ok\n");
}
