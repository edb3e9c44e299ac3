//! The fixed-message error used for faults that carry no recognizable error.
//!
//! A panic raised with `panic!("...")` or `panic_any(42)` does not carry a
//! value of the wrapper's error type. Rather than leak such a payload into the
//! error slot, the wrapper substitutes an [`InternalError`], whose display is
//! always [`INTERNAL_ERROR_MESSAGE`].
//!
//! # Examples
//!
//! ```
//! use catch_rail::InternalError;
//!
//! let err = InternalError::with_detail("index out of bounds");
//!
//! assert_eq!(err.to_string(), "internal error");
//! assert_eq!(err.detail(), Some("index out of bounds"));
//! ```
use core::fmt::{self, Display};

use crate::types::alloc_type::String;

/// Display message shared by every [`InternalError`].
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Error synthesized for an unrecognized fault.
///
/// The display message is fixed. When the fault was a string panic message,
/// that message is retained as [`detail`](Self::detail) so it is still
/// inspectable, but it never changes how the error renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InternalError {
    detail: Option<String>,
}

impl InternalError {
    /// Creates an internal error without detail.
    #[inline]
    pub const fn new() -> Self {
        Self { detail: None }
    }

    /// Creates an internal error that remembers the original fault's message.
    #[inline]
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self { detail: Some(detail.into()) }
    }

    /// Returns the fixed display message.
    #[inline]
    pub const fn message(&self) -> &'static str {
        INTERNAL_ERROR_MESSAGE
    }

    /// Returns the message of the fault this error replaced, if it had one.
    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INTERNAL_ERROR_MESSAGE)
    }
}

impl core::error::Error for InternalError {}

impl From<InternalError> for String {
    fn from(err: InternalError) -> Self {
        err.message().into()
    }
}
