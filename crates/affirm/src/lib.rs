#![deny(missing_docs)]
#![doc = "Non-aborting test assertions. Every check reports failures through a \
caller-supplied [`Reporter`] and returns, leaving flow control to the caller."]

pub mod collections;
pub mod compare;
pub mod error;
pub mod inspect;
pub mod report;

pub use collections::{
    contains_map_key, contains_slice, contains_string, equal_map, equal_slice, not_contains_slice,
    not_contains_string, not_equal_map, not_equal_slice,
};
pub use compare::{
    equal, greater, greater_or_equal, is_false, is_true, less, less_or_equal, not_equal,
};
pub use error::{error, error_as, error_is, no_error, not_error_is};
pub use inspect::{empty, len, nil, not_empty, not_nil, Inspect};
pub use report::Reporter;
