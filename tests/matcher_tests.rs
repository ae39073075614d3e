//! Tests for the minimal glob matcher.

use indexwatch::matcher::{GlobMatcher, IndexMatcher};

fn matches(pattern: &str, name: &str) -> bool {
    GlobMatcher::new(pattern).matches(name)
}

#[test]
fn literal_pattern_matches_only_the_exact_name() {
    assert!(matches("logs-1", "logs-1"));
    assert!(!matches("logs-1", "logs-12"));
    assert!(!matches("logs-1", "xlogs-1"));
}

#[test]
fn trailing_star_matches_prefixes() {
    assert!(matches("logs-*", "logs-2023-01-01"));
    assert!(matches("logs-*", "logs-"));
    assert!(!matches("logs-*", "metrics-2023-01-01"));
}

#[test]
fn leading_star_matches_suffixes() {
    assert!(matches("*-v2", "logs-v2"));
    assert!(!matches("*-v2", "logs-v2-old"));
}

#[test]
fn inner_star_matches_any_run() {
    assert!(matches("logs-*-daily", "logs-app-daily"));
    assert!(matches("logs-*-daily", "logs--daily"));
    assert!(!matches("logs-*-daily", "logs-app-weekly"));
}

#[test]
fn lone_star_matches_everything() {
    assert!(matches("*", ""));
    assert!(matches("*", "anything-at-all"));
}

#[test]
fn multiple_stars() {
    assert!(matches("*logs*2023*", "my-logs-from-2023-01"));
    assert!(!matches("*logs*2023*", "my-2023-logs"));
}

#[test]
fn closures_satisfy_the_matcher_seam() {
    let closure = |name: &str| name.len() > 3;
    assert!(closure.matches("long-name"));
    assert!(!closure.matches("ab"));
}
