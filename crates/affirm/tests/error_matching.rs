mod common;

use std::error::Error;

use common::Recorder;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("parse failed at line {line}")]
struct ParseError {
    line: u32,
}

#[derive(Debug, Error)]
#[error("config load failed")]
struct LoadError {
    #[source]
    cause: ParseError,
}

#[derive(Debug, Error)]
#[error("startup failed")]
struct StartupError {
    #[source]
    cause: LoadError,
}

#[derive(Debug, Error, PartialEq)]
#[error("unrelated")]
struct UnrelatedError;

fn startup_failure(line: u32) -> StartupError {
    StartupError {
        cause: LoadError {
            cause: ParseError { line },
        },
    }
}

#[test]
fn error_passes_for_err_result() {
    let mut t = Recorder::new();
    let result: Result<i32, ParseError> = Err(ParseError { line: 1 });
    affirm::error(&mut t, &result);
    assert!(!t.failed());
}

#[test]
fn error_fails_for_ok_result() {
    let mut t = Recorder::new();
    let result: Result<i32, ParseError> = Ok(7);
    affirm::error(&mut t, &result);
    assert_eq!(t.failures, vec!["expected error, got Ok(7)"]);
}

#[test]
fn no_error_passes_for_ok_result() {
    let mut t = Recorder::new();
    let result: Result<i32, ParseError> = Ok(7);
    affirm::no_error(&mut t, &result);
    assert!(!t.failed());
}

#[test]
fn no_error_fails_for_err_result() {
    let mut t = Recorder::new();
    let result: Result<i32, ParseError> = Err(ParseError { line: 3 });
    affirm::no_error(&mut t, &result);
    assert_eq!(t.failures, vec!["expected no error, got parse failed at line 3"]);
}

#[test]
fn error_is_passes_on_direct_match() {
    let mut t = Recorder::new();
    let err = ParseError { line: 3 };
    affirm::error_is(&mut t, &err, &ParseError { line: 3 });
    assert!(!t.failed());
}

#[test]
fn error_is_passes_on_single_level_wrap() {
    let mut t = Recorder::new();
    let err = LoadError {
        cause: ParseError { line: 3 },
    };
    affirm::error_is(&mut t, &err, &ParseError { line: 3 });
    assert!(!t.failed());
}

#[test]
fn error_is_passes_on_multi_level_wrap() {
    let mut t = Recorder::new();
    let err = startup_failure(3);
    affirm::error_is(&mut t, &err, &ParseError { line: 3 });
    assert!(!t.failed());
}

#[test]
fn error_is_fails_on_unrelated_error() {
    let mut t = Recorder::new();
    let err = startup_failure(3);
    affirm::error_is(&mut t, &err, &UnrelatedError);
    assert_eq!(
        t.failures,
        vec!["expected error startup failed to match unrelated"]
    );
}

#[test]
fn error_is_fails_on_same_type_different_value() {
    let mut t = Recorder::new();
    let err = startup_failure(3);
    affirm::error_is(&mut t, &err, &ParseError { line: 4 });
    assert!(t.failed());
}

#[test]
fn not_error_is_passes_on_unrelated_error() {
    let mut t = Recorder::new();
    let err = startup_failure(3);
    affirm::not_error_is(&mut t, &err, &UnrelatedError);
    assert!(!t.failed());
}

#[test]
fn not_error_is_fails_on_direct_match() {
    let mut t = Recorder::new();
    let err = ParseError { line: 3 };
    affirm::not_error_is(&mut t, &err, &ParseError { line: 3 });
    assert_eq!(
        t.failures,
        vec!["expected error parse failed at line 3 not to match parse failed at line 3"]
    );
}

#[test]
fn not_error_is_fails_on_wrapped_match() {
    let mut t = Recorder::new();
    let err = startup_failure(3);
    affirm::not_error_is(&mut t, &err, &ParseError { line: 3 });
    assert!(t.failed());
}

#[test]
fn error_as_assigns_first_match_in_chain() {
    let mut t = Recorder::new();
    let err = startup_failure(9);
    let mut target: Option<&ParseError> = None;
    affirm::error_as(&mut t, &err, &mut target);
    assert!(!t.failed());
    assert_eq!(target, Some(&ParseError { line: 9 }));
}

#[test]
fn error_as_matches_the_outermost_error_itself() {
    let mut t = Recorder::new();
    let err = ParseError { line: 2 };
    let mut target: Option<&ParseError> = None;
    affirm::error_as(&mut t, &err, &mut target);
    assert!(!t.failed());
    assert_eq!(target, Some(&ParseError { line: 2 }));
}

#[test]
fn error_as_leaves_target_unmodified_on_no_match() {
    let mut t = Recorder::new();
    let err = UnrelatedError;
    let mut target: Option<&ParseError> = None;
    affirm::error_as(&mut t, &err, &mut target);
    assert_eq!(target, None);
    assert_eq!(t.failures.len(), 1);
    assert!(t.failures[0].starts_with("expected error unrelated to match target type"));
}

#[test]
fn error_as_keeps_a_previous_assignment_on_no_match() {
    let mut t = Recorder::new();
    let previous = ParseError { line: 1 };
    let unrelated = UnrelatedError;
    let mut target: Option<&ParseError> = Some(&previous);
    affirm::error_as(&mut t, &unrelated, &mut target);
    assert!(t.failed());
    assert_eq!(target, Some(&ParseError { line: 1 }));
}

#[test]
fn chain_traversal_is_outermost_first() {
    // Two ParseError layers in one chain: the outer one wins.
    #[derive(Debug, Error)]
    #[error("outer parse wrapper")]
    struct Rewrap {
        #[source]
        cause: ParseError,
    }

    let mut t = Recorder::new();
    let err = LoadError {
        cause: ParseError { line: 1 },
    };
    let sources: Vec<_> = std::iter::successors(
        Some(&err as &(dyn Error + 'static)),
        |err| Error::source(*err),
    )
    .map(ToString::to_string)
    .collect();
    assert_eq!(sources, vec!["config load failed", "parse failed at line 1"]);

    let rewrapped = Rewrap {
        cause: ParseError { line: 8 },
    };
    let mut target: Option<&ParseError> = None;
    affirm::error_as(&mut t, &rewrapped, &mut target);
    assert_eq!(target, Some(&ParseError { line: 8 }));
}

#[test]
fn error_checks_mark_the_helper_frame_once_each() {
    let mut t = Recorder::new();
    let result: Result<i32, ParseError> = Ok(1);
    affirm::no_error(&mut t, &result);
    let err = startup_failure(3);
    affirm::error_is(&mut t, &err, &ParseError { line: 3 });
    let mut target: Option<&ParseError> = None;
    affirm::error_as(&mut t, &err, &mut target);
    assert_eq!(t.helper_marks, 3);
}
