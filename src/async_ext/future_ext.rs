//! Extension trait for `Future<Output = Result<T, X>>`.
//!
//! Provides `.catch_faults()` and `.catch_faults_with()` for futures that
//! already exist, mirroring the producer-based entry points of
//! [`Wrapper`](crate::Wrapper).

use core::future::Future;

use crate::types::Options;
use crate::wrapper::Wrapper;

use super::catch_future::{CatchFuture, CaughtFuture};

/// Extension trait for normalizing the faults of an existing future.
///
/// Unlike [`Wrapper::execute_async`], there is no producer to invoke; a
/// panic raised while *constructing* the future has already happened by the
/// time this trait is reached. Only panics during polling are caught.
///
/// # Examples
///
/// ```rust
/// use catch_rail::prelude_async::*;
///
/// async fn load() -> Result<u32, std::io::Error> {
///     Err(std::io::Error::other("disk gone"))
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result = load().catch_faults(&WRAPPER).await;
/// assert_eq!(result.unwrap_err().to_string(), "disk gone");
/// # });
/// ```
pub trait FutureCatchExt<T, X>: Future<Output = Result<T, X>> + Sized {
    /// Normalizes faults with the wrapper's default options.
    #[inline]
    fn catch_faults<E>(self, wrapper: &Wrapper<E>) -> CaughtFuture<Self, E> {
        CatchFuture::from_future(self, wrapper.defaults().clone())
    }

    /// Normalizes faults with `options`.
    #[inline]
    fn catch_faults_with<E>(self, options: &Options<E>) -> CaughtFuture<Self, E> {
        CatchFuture::from_future(self, options.clone())
    }
}

impl<F, T, X> FutureCatchExt<T, X> for F where F: Future<Output = Result<T, X>> {}
