//! The result wrapper: run a producer, catch its fault, return a `Result`.
//!
//! A [`Wrapper`] bundles a synchronous and an asynchronous entry point with a
//! bound default [`Options`]. Every entry point invokes the producer at most
//! once and never lets a producer fault escape: returned errors and unwinding
//! panics alike end up in the `Err` slot, normalized as described in
//! [`crate::fault`].
//!
//! Options given to a `*_with` call replace the bound default as a whole.
//! There is no field-level merge.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{Options, Wrapper};
//!
//! let wrapper: Wrapper<String> =
//!     Wrapper::with_defaults(Options::new().with_transform(|e: String| format!("db: {e}")));
//!
//! let ok = wrapper.execute_sync(|| Ok::<_, String>("Mock Data"));
//! assert_eq!(ok, Ok("Mock Data"));
//!
//! let err = wrapper.execute_sync(|| Err::<(), _>("timeout".to_string()));
//! assert_eq!(err, Err("db: timeout".to_string()));
//!
//! // Per-call options replace the default entirely.
//! let raw = wrapper.execute_sync_with(|| Err::<(), _>("timeout".to_string()), &Options::new());
//! assert_eq!(raw, Err("timeout".to_string()));
//! ```
use core::fmt;

use crate::fault::{guard, Fault};
use crate::types::{BoxError, InternalError, Options};

#[cfg(feature = "async")]
use core::future::Future;

#[cfg(feature = "async")]
use crate::async_ext::CatchFuture;

/// Process-wide wrapper with no default options.
///
/// Holds no mutable state, so it is shared without synchronization.
///
/// ```
/// use catch_rail::WRAPPER;
///
/// let result = WRAPPER.execute_sync(|| "42".parse::<u32>());
/// assert_eq!(result.unwrap(), 42);
/// ```
pub static WRAPPER: Wrapper = Wrapper::new();

/// A reusable pair of sync/async entry points sharing default [`Options`].
///
/// # Type Parameters
///
/// * `E` - The normalized error type. It must be constructible from
///   [`InternalError`] so unrecognized faults have somewhere to go.
pub struct Wrapper<E = BoxError> {
    defaults: Options<E>,
}

impl<E> Wrapper<E> {
    /// Creates a wrapper without default options.
    #[inline]
    pub const fn new() -> Self {
        Self { defaults: Options::new() }
    }

    /// Creates a wrapper bound to `defaults`.
    ///
    /// The transform inside `defaults` is shared, not copied.
    #[inline]
    pub fn with_defaults(defaults: Options<E>) -> Self {
        Self { defaults }
    }

    /// Returns the bound default options.
    #[inline]
    pub fn defaults(&self) -> &Options<E> {
        &self.defaults
    }

    /// Picks the call-site options if given, otherwise the bound default.
    #[inline]
    fn resolve<'a>(&'a self, options: Option<&'a Options<E>>) -> &'a Options<E> {
        options.unwrap_or(&self.defaults)
    }

    /// Runs a synchronous producer with the bound default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::Wrapper;
    ///
    /// let wrapper: Wrapper = Wrapper::new();
    ///
    /// let err = wrapper.execute_sync(|| -> Result<(), std::io::Error> {
    ///     Err(std::io::Error::other("Sync Error"))
    /// });
    /// assert_eq!(err.unwrap_err().to_string(), "Sync Error");
    ///
    /// let err = wrapper.execute_sync(|| -> Result<(), std::io::Error> { panic!("raw string") });
    /// assert_eq!(err.unwrap_err().to_string(), "internal error");
    /// ```
    #[inline]
    pub fn execute_sync<T, X, F>(&self, producer: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<E>,
        E: From<InternalError> + 'static,
    {
        run_sync(producer, self.resolve(None))
    }

    /// Runs a synchronous producer with `options` in place of the defaults.
    #[inline]
    pub fn execute_sync_with<T, X, F>(&self, producer: F, options: &Options<E>) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<E>,
        E: From<InternalError> + 'static,
    {
        run_sync(producer, self.resolve(Some(options)))
    }

    /// Runs an asynchronous producer with the bound default options.
    ///
    /// The producer is invoked on the first poll of the returned future.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::Wrapper;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let wrapper: Wrapper = Wrapper::new();
    ///
    /// let ok = wrapper.execute_async(|| async { Ok::<_, std::io::Error>("Mock Data") }).await;
    /// assert_eq!(ok.unwrap(), "Mock Data");
    /// # });
    /// ```
    #[cfg(feature = "async")]
    #[inline]
    pub fn execute_async<T, X, F, Fut>(&self, producer: F) -> CatchFuture<F, Fut, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, X>>,
    {
        CatchFuture::new(producer, self.resolve(None).clone())
    }

    /// Runs an asynchronous producer with `options` in place of the defaults.
    #[cfg(feature = "async")]
    #[inline]
    pub fn execute_async_with<T, X, F, Fut>(
        &self,
        producer: F,
        options: &Options<E>,
    ) -> CatchFuture<F, Fut, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, X>>,
    {
        CatchFuture::new(producer, self.resolve(Some(options)).clone())
    }
}

impl<E> Clone for Wrapper<E> {
    fn clone(&self) -> Self {
        Self { defaults: self.defaults.clone() }
    }
}

impl<E> Default for Wrapper<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Wrapper<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper").field("defaults", &self.defaults).finish()
    }
}

/// Creates a wrapper, optionally bound to default options.
///
/// `create_wrapper(None)` is equivalent to [`Wrapper::new`].
#[inline]
pub fn create_wrapper<E>(defaults: Option<Options<E>>) -> Wrapper<E> {
    match defaults {
        Some(defaults) => Wrapper::with_defaults(defaults),
        None => Wrapper::new(),
    }
}

/// Runs a synchronous producer through [`WRAPPER`].
#[inline]
pub fn execute_sync<T, X, F>(producer: F) -> Result<T, BoxError>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<BoxError>,
{
    WRAPPER.execute_sync(producer)
}

/// Runs an asynchronous producer through [`WRAPPER`].
#[cfg(feature = "async")]
#[inline]
pub fn execute_async<T, X, F, Fut>(producer: F) -> CatchFuture<F, Fut, BoxError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
{
    WRAPPER.execute_async(producer)
}

fn run_sync<T, X, E, F>(producer: F, options: &Options<E>) -> Result<T, E>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<E>,
    E: From<InternalError> + 'static,
{
    let fault = match guard(producer) {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => Fault::from_error(error.into()),
        Err(payload) => Fault::from_panic(payload),
    };
    Err(fault.normalize(options))
}
