//! Slice, string, and map checks.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::report::{fail_match, fail_mismatch, Reporter};

/// Checks that `expected` and `actual` hold equal elements in the same
/// order. Slices of different length are never equal.
pub fn equal_slice<R: Reporter + ?Sized, E: PartialEq + Debug>(
    t: &mut R,
    expected: &[E],
    actual: &[E],
) {
    t.mark_helper();
    if expected != actual {
        fail_mismatch(t, &expected, &actual);
    }
}

/// Checks that `unexpected` and `actual` differ in length, order, or
/// elements.
pub fn not_equal_slice<R: Reporter + ?Sized, E: PartialEq + Debug>(
    t: &mut R,
    unexpected: &[E],
    actual: &[E],
) {
    t.mark_helper();
    if unexpected == actual {
        fail_match(t, &actual);
    }
}

/// Checks that `values` contains an element equal to `item`.
pub fn contains_slice<R: Reporter + ?Sized, E: PartialEq + Debug>(
    t: &mut R,
    values: &[E],
    item: &E,
) {
    t.mark_helper();
    if !values.contains(item) {
        t.report_failure(format!("expected {values:?} to contain {item:?}"));
    }
}

/// Checks that no element of `values` equals `item`.
pub fn not_contains_slice<R: Reporter + ?Sized, E: PartialEq + Debug>(
    t: &mut R,
    values: &[E],
    item: &E,
) {
    t.mark_helper();
    if values.contains(item) {
        t.report_failure(format!("expected {values:?} not to contain {item:?}"));
    }
}

/// Checks that `s` contains `substr`.
pub fn contains_string<R: Reporter + ?Sized>(t: &mut R, s: &str, substr: &str) {
    t.mark_helper();
    if !s.contains(substr) {
        t.report_failure(format!("expected {s:?} to contain {substr:?}"));
    }
}

/// Checks that `s` does not contain `substr`.
pub fn not_contains_string<R: Reporter + ?Sized>(t: &mut R, s: &str, substr: &str) {
    t.mark_helper();
    if s.contains(substr) {
        t.report_failure(format!("expected {s:?} not to contain {substr:?}"));
    }
}

/// Checks that `expected` and `actual` hold identical key sets with equal
/// values. Iteration order is irrelevant.
pub fn equal_map<R, K, V, S>(t: &mut R, expected: &HashMap<K, V, S>, actual: &HashMap<K, V, S>)
where
    R: Reporter + ?Sized,
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
    S: BuildHasher,
{
    t.mark_helper();
    if expected != actual {
        fail_mismatch(t, &expected, &actual);
    }
}

/// Checks that `unexpected` and `actual` differ in key set or values.
pub fn not_equal_map<R, K, V, S>(t: &mut R, unexpected: &HashMap<K, V, S>, actual: &HashMap<K, V, S>)
where
    R: Reporter + ?Sized,
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
    S: BuildHasher,
{
    t.mark_helper();
    if unexpected == actual {
        fail_match(t, &actual);
    }
}

/// Checks that `map` contains `key`, regardless of the associated value.
pub fn contains_map_key<R, K, V, S>(t: &mut R, map: &HashMap<K, V, S>, key: &K)
where
    R: Reporter + ?Sized,
    K: Eq + Hash + Debug,
    V: Debug,
    S: BuildHasher,
{
    t.mark_helper();
    if !map.contains_key(key) {
        t.report_failure(format!("expected map {map:?} to contain key {key:?}"));
    }
}
