//! Error-shape checks and wrapped-error chain matching.

use std::any::type_name;
use std::error::Error;
use std::fmt::{Debug, Display};
use std::iter;

use crate::report::Reporter;

/// Checks that `result` is an error.
pub fn error<R: Reporter + ?Sized, U: Debug, E>(t: &mut R, result: &Result<U, E>) {
    t.mark_helper();
    if let Ok(value) = result {
        t.report_failure(format!("expected error, got Ok({value:?})"));
    }
}

/// Checks that `result` is not an error.
pub fn no_error<R: Reporter + ?Sized, U, E: Display>(t: &mut R, result: &Result<U, E>) {
    t.mark_helper();
    if let Err(err) = result {
        t.report_failure(format!("expected no error, got {err}"));
    }
}

/// Iterates over `err` followed by its transitive sources, one level at a
/// time. Chains are assumed finite and non-cyclic.
fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> + 'a {
    iter::successors(Some(err), |err| Error::source(*err))
}

fn chain_matches<E: Error + PartialEq + 'static>(
    err: &(dyn Error + 'static),
    target: &E,
) -> bool {
    chain(err).any(|cause| cause.downcast_ref::<E>() == Some(target))
}

/// Checks that `err`, or some error in its source chain, equals `target`.
pub fn error_is<R: Reporter + ?Sized, E: Error + PartialEq + 'static>(
    t: &mut R,
    err: &(dyn Error + 'static),
    target: &E,
) {
    t.mark_helper();
    if !chain_matches(err, target) {
        t.report_failure(format!("expected error {err} to match {target}"));
    }
}

/// Checks that neither `err` nor any error in its source chain equals
/// `target`.
pub fn not_error_is<R: Reporter + ?Sized, E: Error + PartialEq + 'static>(
    t: &mut R,
    err: &(dyn Error + 'static),
    target: &E,
) {
    t.mark_helper();
    if chain_matches(err, target) {
        t.report_failure(format!("expected error {err} not to match {target}"));
    }
}

/// Checks that `err`, or some error in its source chain, has concrete type
/// `E`, assigning the first match through `target`.
///
/// On failure `target` is left unmodified and the failure names the type
/// that was searched for.
pub fn error_as<'a, R: Reporter + ?Sized, E: Error + 'static>(
    t: &mut R,
    err: &'a (dyn Error + 'static),
    target: &mut Option<&'a E>,
) {
    t.mark_helper();
    match chain(err).find_map(|cause| cause.downcast_ref::<E>()) {
        Some(found) => *target = Some(found),
        None => t.report_failure(format!(
            "expected error {err} to match target type {}",
            type_name::<E>()
        )),
    }
}
