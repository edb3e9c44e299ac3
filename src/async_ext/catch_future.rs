//! The future behind every asynchronous entry point.
//!
//! [`CatchFuture`] invokes its producer on the first poll, then polls the
//! produced future to completion. Both steps run under a panic guard, so a
//! panic in either is classified like any other fault instead of unwinding
//! through the caller's executor.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::fault::{guard, Fault};
use crate::types::{InternalError, Options};

/// A [`CatchFuture`] built around an already constructed future.
pub type CaughtFuture<Fut, E> = CatchFuture<fn() -> Fut, Fut, E>;

pin_project! {
    /// Future returned by [`Wrapper::execute_async`](crate::Wrapper::execute_async).
    ///
    /// Resolves to `Ok` with the produced value or `Err` with the normalized
    /// error. It never panics because of the producer; polling it again after
    /// it resolved does.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `CatchFuture` drops the producer or its future. Nothing is
    /// aborted beyond what that drop does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catch_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let wrapper: Wrapper<String> = Wrapper::new();
    ///
    /// let result = wrapper
    ///     .execute_async(|| async { Err::<(), _>("Async Error".to_string()) })
    ///     .await;
    /// assert_eq!(result, Err("Async Error".to_string()));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<F, Fut, E> {
        producer: Option<F>,
        #[pin]
        future: Option<Fut>,
        options: Options<E>,
    }
}

impl<F, Fut, E> CatchFuture<F, Fut, E> {
    /// Creates a future that will invoke `producer` when first polled.
    #[inline]
    pub fn new(producer: F, options: Options<E>) -> Self {
        Self { producer: Some(producer), future: None, options }
    }

    /// Returns the options this future normalizes with.
    #[inline]
    pub fn options(&self) -> &Options<E> {
        &self.options
    }
}

impl<Fut, E> CatchFuture<fn() -> Fut, Fut, E> {
    /// Wraps a future that already exists.
    #[inline]
    pub fn from_future(future: Fut, options: Options<E>) -> Self {
        Self { producer: None, future: Some(future), options }
    }
}

impl<F, Fut, T, X, E> Future for CatchFuture<F, Fut, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<E>,
    E: From<InternalError> + 'static,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if this.future.is_none() {
            let producer = this.producer.take().expect("CatchFuture polled after completion");
            match guard(producer) {
                Ok(future) => this.future.set(Some(future)),
                Err(payload) => {
                    return Poll::Ready(Err(Fault::from_panic(payload).normalize(this.options)));
                },
            }
        }

        let future = this.future.as_mut().as_pin_mut().expect("producer future is set");
        let polled = guard(|| future.poll(cx));

        let fault = match polled {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => {
                this.future.set(None);
                return Poll::Ready(Ok(value));
            },
            Ok(Poll::Ready(Err(error))) => Fault::from_error(error.into()),
            Err(payload) => Fault::from_panic(payload),
        };

        this.future.set(None);
        Poll::Ready(Err(fault.normalize(this.options)))
    }
}

impl<F, Fut, T, X, E> FusedFuture for CatchFuture<F, Fut, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<E>,
    E: From<InternalError> + 'static,
{
    fn is_terminated(&self) -> bool {
        self.producer.is_none() && self.future.is_none()
    }
}
