//! Per-wrapper and per-call normalization options.
//!
//! [`Options`] carries a single optional field: the transform applied to a
//! recognized error before it is placed in the error slot. An `Options` value
//! is built once and then only shared; cloning it shares the same transform.
//!
//! # Examples
//!
//! ```
//! use catch_rail::Options;
//!
//! let options: Options<String> = Options::new().with_transform(|e: String| format!("wrapped: {e}"));
//!
//! assert!(options.has_transform());
//! assert_eq!(options.apply("boom".to_string()), "wrapped: boom");
//! ```
use core::fmt;

use crate::types::alloc_type::Arc;

/// Shared error transform, `E -> E`.
///
/// Must not panic; a panicking transform is not caught.
pub type Transform<E> = Arc<dyn Fn(E) -> E + Send + Sync>;

/// Normalization options for a wrapper or a single call.
///
/// When passed to a call it replaces the wrapper's bound default as a whole:
/// an `Options::new()` passed per call disables a default transform.
pub struct Options<E> {
    transform: Option<Transform<E>>,
}

impl<E> Options<E> {
    /// Options without a transform: recognized errors pass through unchanged.
    #[inline]
    pub const fn new() -> Self {
        Self { transform: None }
    }

    /// Sets the transform applied to recognized errors.
    #[inline]
    pub fn with_transform<F>(self, transform: F) -> Self
    where
        F: Fn(E) -> E + Send + Sync + 'static,
    {
        Self { transform: Some(Arc::new(transform)) }
    }

    /// Sets an already shared transform.
    #[inline]
    pub fn with_shared_transform(self, transform: Transform<E>) -> Self {
        Self { transform: Some(transform) }
    }

    /// Returns the configured transform, if any.
    #[inline]
    pub fn transform(&self) -> Option<&Transform<E>> {
        self.transform.as_ref()
    }

    #[inline]
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Applies the transform to `error`, or returns it untouched.
    #[inline]
    pub fn apply(&self, error: E) -> E {
        match &self.transform {
            Some(transform) => transform(error),
            None => error,
        }
    }
}

impl<E> Clone for Options<E> {
    fn clone(&self) -> Self {
        Self { transform: self.transform.clone() }
    }
}

impl<E> Default for Options<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Options<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
