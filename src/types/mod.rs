//! Value types shared by every entry point.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{InternalError, Options, Outcome};
//!
//! let options: Options<String> = Options::new().with_transform(|e: String| e.to_uppercase());
//! let outcome: Outcome<u32, String> = Err(options.apply("boom".into()));
//!
//! assert_eq!(outcome, Err("BOOM".to_string()));
//! assert_eq!(InternalError::new().to_string(), "internal error");
//! ```
pub mod alloc_type;
pub mod internal_error;
pub mod options;

#[cfg(feature = "serde")]
pub mod envelope;

pub use internal_error::*;
pub use options::*;

#[cfg(feature = "serde")]
pub use envelope::Envelope;

/// Default normalized error type: any boxed error.
///
/// Every `core::error::Error + Send + Sync` converts into it, so producers
/// with heterogeneous error types can share one wrapper.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;

/// Result of running a producer through a wrapper.
///
/// `Ok` carries the produced value, `Err` the normalized error.
///
/// # Type Parameters
///
/// * `T` - The produced value type
/// * `E` - The normalized error type
pub type Outcome<T, E = BoxError> = Result<T, E>;
