//! Equality, ordering, and boolean checks.

use std::fmt::Debug;

use crate::report::{fail_compare, fail_match, fail_mismatch, Reporter};

/// Checks that `expected` and `actual` are equal.
pub fn equal<R: Reporter + ?Sized, V: PartialEq + Debug>(t: &mut R, expected: V, actual: V) {
    t.mark_helper();
    if expected != actual {
        fail_mismatch(t, &expected, &actual);
    }
}

/// Checks that `unexpected` and `actual` are not equal.
pub fn not_equal<R: Reporter + ?Sized, V: PartialEq + Debug>(t: &mut R, unexpected: V, actual: V) {
    t.mark_helper();
    if unexpected == actual {
        fail_match(t, &actual);
    }
}

/// Checks that `a < b`.
pub fn less<R: Reporter + ?Sized, V: PartialOrd + Debug>(t: &mut R, a: V, b: V) {
    t.mark_helper();
    if a >= b {
        fail_compare(t, &a, "<", &b);
    }
}

/// Checks that `a <= b`.
pub fn less_or_equal<R: Reporter + ?Sized, V: PartialOrd + Debug>(t: &mut R, a: V, b: V) {
    t.mark_helper();
    if a > b {
        fail_compare(t, &a, "<=", &b);
    }
}

/// Checks that `a > b`.
pub fn greater<R: Reporter + ?Sized, V: PartialOrd + Debug>(t: &mut R, a: V, b: V) {
    t.mark_helper();
    if a <= b {
        fail_compare(t, &a, ">", &b);
    }
}

/// Checks that `a >= b`.
pub fn greater_or_equal<R: Reporter + ?Sized, V: PartialOrd + Debug>(t: &mut R, a: V, b: V) {
    t.mark_helper();
    if a < b {
        fail_compare(t, &a, ">=", &b);
    }
}

/// Checks that `value` is `true`.
pub fn is_true<R: Reporter + ?Sized>(t: &mut R, value: bool) {
    t.mark_helper();
    if !value {
        fail_mismatch(t, &true, &false);
    }
}

/// Checks that `value` is `false`.
pub fn is_false<R: Reporter + ?Sized>(t: &mut R, value: bool) {
    t.mark_helper();
    if value {
        fail_mismatch(t, &false, &true);
    }
}
