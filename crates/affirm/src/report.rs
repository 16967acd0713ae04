//! Reporter contract and shared failure formatters.

use std::fmt::Debug;

/// Capability set required of the reporting context passed to every check.
///
/// The contract matches what test harnesses commonly expose: a hook that
/// marks the current frame as a helper so failure locations attribute to the
/// caller, and a sink that records a failure without stopping the test. Every
/// public check calls [`Reporter::mark_helper`] exactly once, at entry,
/// before evaluating its predicate.
pub trait Reporter {
    /// Marks the calling frame as an assertion helper for source-line
    /// attribution. Hosts without a frame-tracking mechanism may no-op.
    fn mark_helper(&mut self);

    /// Records a failure for the current test. Must return normally; a check
    /// never aborts the process or unwinds on behalf of the reporter.
    fn report_failure(&mut self, message: String);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn mark_helper(&mut self) {
        (**self).mark_helper();
    }

    fn report_failure(&mut self, message: String) {
        (**self).report_failure(message);
    }
}

/// Reports an "expected X, got Y" mismatch.
pub(crate) fn fail_mismatch<R: Reporter + ?Sized>(
    t: &mut R,
    expected: &dyn Debug,
    actual: &dyn Debug,
) {
    t.report_failure(format!("expected {expected:?}, got {actual:?}"));
}

/// Reports an unexpected match between values required to differ.
pub(crate) fn fail_match<R: Reporter + ?Sized>(t: &mut R, value: &dyn Debug) {
    t.report_failure(format!("expected different values, got equal: {value:?}"));
}

/// Reports an ordering relation that did not hold.
pub(crate) fn fail_compare<R: Reporter + ?Sized>(
    t: &mut R,
    a: &dyn Debug,
    op: &str,
    b: &dyn Debug,
) {
    t.report_failure(format!("expected {a:?} {op} {b:?}"));
}
