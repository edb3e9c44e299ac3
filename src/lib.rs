//! Turn faulting producers into plain `Result`s.
//!
//! A producer is a zero-argument closure, synchronous or asynchronous, that
//! returns a `Result`. It may also panic. A [`Wrapper`] runs it once and
//! always hands back a `Result`: the produced value, or the fault normalized
//! into the wrapper's error type. Nothing unwinds past the wrapper.
//!
//! Normalization follows one table (see [`fault`]):
//!
//! | fault | transform configured? | error slot |
//! |---|---|---|
//! | `Err(e)` or `panic_any(e)` with `e: E` | yes | `transform(e)` |
//! | `Err(e)` or `panic_any(e)` with `e: E` | no | `e` |
//! | `panic!("...")` message, or any other panic payload | either | [`InternalError`] (`"internal error"`) |
//!
//! A `&str`/`String` panic message is never recognized, even when `E` is
//! `String`.
//!
//! # Examples
//!
//! ## Sync
//!
//! ```
//! use catch_rail::WRAPPER;
//!
//! let ok = WRAPPER.execute_sync(|| Ok::<_, std::io::Error>("Mock Data"));
//! assert_eq!(ok.unwrap(), "Mock Data");
//!
//! let err = WRAPPER.execute_sync(|| -> Result<(), std::io::Error> { panic!("raw string") });
//! assert_eq!(err.unwrap_err().to_string(), "internal error");
//! ```
//!
//! ## Async with a transform
//!
//! ```
//! use catch_rail::{create_wrapper, Options};
//!
//! #[derive(Debug, PartialEq)]
//! struct ApiError {
//!     message: String,
//! }
//!
//! impl From<catch_rail::InternalError> for ApiError {
//!     fn from(err: catch_rail::InternalError) -> Self {
//!         Self { message: err.to_string() }
//!     }
//! }
//!
//! let wrapper = create_wrapper(Some(
//!     Options::new().with_transform(|e: ApiError| ApiError { message: e.message.to_uppercase() }),
//! ));
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let result = wrapper
//!     .execute_async(|| async { Err::<(), _>(ApiError { message: "Async Error".into() }) })
//!     .await;
//! assert_eq!(result, Err(ApiError { message: "ASYNC ERROR".into() }));
//! # });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Fault classification and normalization
pub mod fault;
/// Shorthand macros over the wrapper entry points
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Internal error, options and outcome types
pub mod types;
/// The wrapper and its sync entry points
pub mod wrapper;

/// Async entry points and extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use types::{BoxError, InternalError, Options, Outcome, Transform, INTERNAL_ERROR_MESSAGE};
pub use wrapper::{create_wrapper, execute_sync, Wrapper, WRAPPER};

#[cfg(feature = "async")]
pub use wrapper::execute_async;

#[cfg(feature = "serde")]
pub use types::Envelope;
