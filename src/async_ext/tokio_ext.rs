//! Tokio-specific async extensions.
//!
//! [`execute_spawned`] runs a producer as its own tokio task. A panic inside
//! the task surfaces as a [`JoinError`](tokio::task::JoinError) carrying the
//! panic payload, which is classified exactly like a caught panic.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;

use tokio::runtime::Handle;

use crate::fault::Fault;
use crate::types::alloc_type::Box;
use crate::types::{InternalError, Options};
use crate::wrapper::Wrapper;

/// Spawns `producer` on the current tokio runtime and normalizes its faults.
///
/// - `Ok(value)` from the task is returned as is.
/// - `Err(x)` from the task is a recognized fault.
/// - A panicking task is classified by its payload.
/// - A task cancelled by the runtime is an unrecognized fault.
///
/// Called outside a runtime, resolves to an [`InternalError`] instead of
/// panicking.
///
/// # Example
///
/// ```rust
/// use catch_rail::async_ext::execute_spawned;
/// use catch_rail::WRAPPER;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result = execute_spawned(&WRAPPER, || async {
///     if true {
///         panic!("worker exploded");
///     }
///     Ok::<u32, std::io::Error>(1)
/// })
/// .await;
///
/// assert_eq!(result.unwrap_err().to_string(), "internal error");
/// # });
/// ```
pub fn execute_spawned<F, Fut, T, X, E>(
    wrapper: &Wrapper<E>,
    producer: F,
) -> impl Future<Output = Result<T, E>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, X>> + Send + 'static,
    T: Send + 'static,
    X: Into<E> + Send + 'static,
    E: From<InternalError> + 'static,
{
    spawn_normalized(producer, wrapper.defaults().clone())
}

/// Like [`execute_spawned`], with `options` in place of the wrapper's
/// defaults.
///
/// The wrapper itself is not consulted; only `options` applies.
pub fn execute_spawned_with<F, Fut, T, X, E>(
    _wrapper: &Wrapper<E>,
    producer: F,
    options: &Options<E>,
) -> impl Future<Output = Result<T, E>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, X>> + Send + 'static,
    T: Send + 'static,
    X: Into<E> + Send + 'static,
    E: From<InternalError> + 'static,
{
    spawn_normalized(producer, options.clone())
}

fn spawn_normalized<F, Fut, T, X, E>(
    producer: F,
    options: Options<E>,
) -> impl Future<Output = Result<T, E>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, X>> + Send + 'static,
    T: Send + 'static,
    X: Into<E> + Send + 'static,
    E: From<InternalError> + 'static,
{
    let spawned = Handle::try_current().map(|handle| handle.spawn(async move { producer().await }));

    async move {
        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => return Err(E::from(InternalError::with_detail(err.to_string()))),
        };

        let fault = match handle.await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(error)) => Fault::from_error(error.into()),
            Err(join_error) if join_error.is_panic() => Fault::from_panic(join_error.into_panic()),
            Err(join_error) => Fault::Unrecognized(Box::new(join_error.to_string())),
        };
        Err(fault.normalize(&options))
    }
}

impl<E> Wrapper<E> {
    /// Method form of [`execute_spawned`].
    #[inline]
    pub fn execute_spawned<F, Fut, T, X>(&self, producer: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        T: Send + 'static,
        X: Into<E> + Send + 'static,
        E: From<InternalError> + 'static,
    {
        execute_spawned(self, producer)
    }

    /// Method form of [`execute_spawned_with`].
    #[inline]
    pub fn execute_spawned_with<F, Fut, T, X>(
        &self,
        producer: F,
        options: &Options<E>,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        T: Send + 'static,
        X: Into<E> + Send + 'static,
        E: From<InternalError> + 'static,
    {
        execute_spawned_with(self, producer, options)
    }
}
