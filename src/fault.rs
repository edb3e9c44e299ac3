//! Fault classification and normalization.
//!
//! A producer faults either by returning `Err` or by panicking. A returned
//! error is always a value of the wrapper's error type and therefore
//! *recognized*. A panic payload is recognized only if it is a value of that
//! type (raised with `std::panic::panic_any`). The `&str`/`String` payload
//! of `panic!("...")` is always *unrecognized*, even when `E` is `String`,
//! since whether rustc lowers a message to `&str` or `String` depends on its
//! format arguments.
//!
//! | fault | transform? | normalized |
//! |---|---|---|
//! | recognized `e` | yes | `transform(e)` |
//! | recognized `e` | no | `e` |
//! | unrecognized | either | `E::from(InternalError)` |
//!
//! # Examples
//!
//! ```
//! use catch_rail::fault::Fault;
//! use catch_rail::Options;
//!
//! let options: Options<String> = Options::new().with_transform(|e: String| format!("[{e}]"));
//!
//! let recognized: Fault<String> = Fault::from_error("boom".to_string());
//! assert_eq!(recognized.normalize(&options), "[boom]");
//!
//! let unrecognized: Fault<String> = Fault::from_panic(Box::new(17_u8));
//! assert_eq!(unrecognized.normalize(&options), "internal error");
//! ```
use core::any::Any;
use core::fmt;

use crate::types::alloc_type::{Box, String};
use crate::types::{InternalError, Options};

/// Payload carried by an unwinding panic.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// A captured producer fault, before normalization.
pub enum Fault<E> {
    /// A value of the wrapper's error type.
    Recognized(E),
    /// A panic payload of any other type.
    Unrecognized(PanicPayload),
}

impl<E> Fault<E> {
    /// Classifies an error returned by a producer.
    #[inline]
    pub fn from_error(error: E) -> Self {
        Self::Recognized(error)
    }

    /// Classifies a panic payload by downcasting it to `E`.
    ///
    /// Message payloads are checked first and never recognized.
    pub fn from_panic(payload: PanicPayload) -> Self
    where
        E: 'static,
    {
        if panic_message(&payload).is_some() {
            return Self::Unrecognized(payload);
        }
        match payload.downcast::<E>() {
            Ok(error) => Self::Recognized(*error),
            Err(payload) => Self::Unrecognized(payload),
        }
    }

    /// Returns `true` if the fault is a value of the wrapper's error type.
    #[inline]
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// Turns the fault into the value placed in the error slot.
    ///
    /// The transform in `options` only ever sees recognized errors.
    pub fn normalize(self, options: &Options<E>) -> E
    where
        E: From<InternalError>,
    {
        match self {
            Self::Recognized(error) if options.has_transform() => {
                trace_branch("transformed");
                options.apply(error)
            },
            Self::Recognized(error) => {
                trace_branch("passed_through");
                error
            },
            Self::Unrecognized(payload) => {
                trace_branch("unrecognized");
                E::from(internal_error_for(&payload))
            },
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Fault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recognized(error) => f.debug_tuple("Recognized").field(error).finish(),
            Self::Unrecognized(payload) => f
                .debug_tuple("Unrecognized")
                .field(&panic_message(payload).unwrap_or("<opaque payload>"))
                .finish(),
        }
    }
}

/// Returns the message of a `panic!("...")` payload.
pub fn panic_message(payload: &PanicPayload) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

fn internal_error_for(payload: &PanicPayload) -> InternalError {
    match panic_message(payload) {
        Some(message) => InternalError::with_detail(message),
        None => InternalError::new(),
    }
}

/// Runs `f`, capturing an unwinding panic as its payload.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn guard<R>(f: impl FnOnce() -> R) -> Result<R, PanicPayload> {
    std::panic::catch_unwind(core::panic::AssertUnwindSafe(f))
}

/// Without `std` panics cannot be caught; `f` simply runs.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn guard<R>(f: impl FnOnce() -> R) -> Result<R, PanicPayload> {
    Ok(f())
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_branch(branch: &'static str) {
    tracing::debug!(target: "catch_rail", branch, "producer fault normalized");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_branch(_branch: &'static str) {}
