//! Runtime capability probes for nil-ness and length, and the checks built
//! on them.

use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use crate::report::{fail_match, Reporter};

/// Capability probe over the closed set of nil-able and sized kinds.
///
/// Nil-able kinds are those whose runtime payload can be absent even though
/// the value itself is a perfectly ordinary non-null object: `Option` and raw
/// pointers. Sized kinds are the standard containers with an element count.
/// Scalars implement the trait with both defaults, so they are never nil and
/// carry no length; the size checks reject them at runtime with a usage
/// failure rather than a compile error.
pub trait Inspect {
    /// Returns true when the runtime payload is absent (`None` or a null
    /// pointer).
    fn is_nil(&self) -> bool {
        false
    }

    /// Returns the element count for sized containers, `None` for kinds
    /// without a length.
    fn length(&self) -> Option<usize> {
        None
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn length(&self) -> Option<usize> {
        (**self).length()
    }
}

impl<T> Inspect for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T> Inspect for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Inspect for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl Inspect for str {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Inspect for String {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for [T] {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn length(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Inspect for Vec<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for VecDeque<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

macro_rules! impl_inspect_scalar {
    ($($ty:ty),* $(,)?) => {
        $(impl Inspect for $ty {})*
    };
}

impl_inspect_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ()
);

/// Checks that `value` has no runtime payload.
pub fn nil<R: Reporter + ?Sized, V: Inspect + Debug>(t: &mut R, value: &V) {
    t.mark_helper();
    if !value.is_nil() {
        t.report_failure(format!("expected nil, got {value:?}"));
    }
}

/// Checks that `value` has a runtime payload.
pub fn not_nil<R: Reporter + ?Sized, V: Inspect + Debug>(t: &mut R, value: &V) {
    t.mark_helper();
    if value.is_nil() {
        fail_match(t, value);
    }
}

/// Checks that `value` has the expected length.
///
/// Kinds without a length are a usage failure naming the subject's type,
/// distinct from a length mismatch.
pub fn len<R: Reporter + ?Sized, V: Inspect>(t: &mut R, value: &V, expected: usize) {
    t.mark_helper();
    let Some(actual) = value.length() else {
        t.report_failure(format!(
            "expected value with length, got unsupported type {}",
            type_name::<V>()
        ));
        return;
    };
    if actual != expected {
        t.report_failure(format!("expected length {expected}, got {actual}"));
    }
}

/// Checks that `value` is empty. Nil values are always empty.
pub fn empty<R: Reporter + ?Sized, V: Inspect + Debug>(t: &mut R, value: &V) {
    t.mark_helper();
    if value.is_nil() {
        return;
    }

    let Some(length) = value.length() else {
        t.report_failure(format!(
            "expected empty value, got unsupported type {}",
            type_name::<V>()
        ));
        return;
    };

    if length != 0 {
        t.report_failure(format!("expected empty value, got {value:?}"));
    }
}

/// Checks that `value` is not empty. Nil values are always empty.
pub fn not_empty<R: Reporter + ?Sized, V: Inspect + Debug>(t: &mut R, value: &V) {
    t.mark_helper();
    if value.is_nil() {
        t.report_failure(format!("expected non-empty value, got {value:?}"));
        return;
    }

    let Some(length) = value.length() else {
        t.report_failure(format!(
            "expected non-empty value, got unsupported type {}",
            type_name::<V>()
        ));
        return;
    };

    if length == 0 {
        t.report_failure(format!("expected non-empty value, got {value:?}"));
    }
}
