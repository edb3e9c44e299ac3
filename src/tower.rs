//! Tower integration for catch-rail.
//!
//! This module provides a Tower `Layer` and `Service` that normalize a
//! service's faults the way [`Wrapper`] does for a producer: service errors
//! are recognized faults, and panics raised in `poll_ready`, `call` or the
//! response future are classified by payload.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use catch_rail::tower::CatchLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(CatchLayer::<BoxError>::new())
//!     .service(my_service);
//! ```

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::async_ext::{CatchFuture, CaughtFuture};
use crate::fault::{guard, Fault};
use crate::types::{BoxError, InternalError, Options};
use crate::wrapper::Wrapper;

/// A Tower [`Layer`] that normalizes service faults into `E`.
///
/// # Example
///
/// ```rust,ignore
/// use catch_rail::tower::CatchLayer;
/// use catch_rail::Options;
///
/// // Pass errors through unchanged, replace panics with `InternalError`
/// let layer = CatchLayer::<BoxError>::new();
///
/// // Or rewrite every recognized error
/// let layer = CatchLayer::with_options(Options::new().with_transform(redact));
/// ```
pub struct CatchLayer<E = BoxError> {
    options: Options<E>,
}

impl<E> CatchLayer<E> {
    /// Creates a layer without a transform.
    #[inline]
    pub const fn new() -> Self {
        Self { options: Options::new() }
    }

    /// Creates a layer normalizing with `options`.
    #[inline]
    pub fn with_options(options: Options<E>) -> Self {
        Self { options }
    }

    /// Creates a layer sharing a wrapper's default options.
    #[inline]
    pub fn from_wrapper(wrapper: &Wrapper<E>) -> Self {
        Self { options: wrapper.defaults().clone() }
    }

    /// Returns the options applied by services built from this layer.
    #[inline]
    pub fn options(&self) -> &Options<E> {
        &self.options
    }
}

impl<E> Clone for CatchLayer<E> {
    fn clone(&self) -> Self {
        Self { options: self.options.clone() }
    }
}

impl<E> Default for CatchLayer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for CatchLayer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchLayer").field("options", &self.options).finish()
    }
}

impl<S, E> Layer<S> for CatchLayer<E> {
    type Service = CatchService<S, E>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        CatchService { inner, options: self.options.clone() }
    }
}

/// A Tower [`Service`] that normalizes the wrapped service's faults.
///
/// This is created by [`CatchLayer`] or [`ServiceCatchExt::normalize_faults`].
pub struct CatchService<S, E = BoxError> {
    inner: S,
    options: Options<E>,
}

impl<S, E> CatchService<S, E> {
    /// Creates a new `CatchService` wrapping the given service.
    #[inline]
    pub fn new(inner: S, options: Options<E>) -> Self {
        Self { inner, options }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone, E> Clone for CatchService<S, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), options: self.options.clone() }
    }
}

impl<S: fmt::Debug, E> fmt::Debug for CatchService<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchService")
            .field("inner", &self.inner)
            .field("options", &self.options)
            .finish()
    }
}

impl<S, E, Request> Service<Request> for CatchService<S, E>
where
    S: Service<Request>,
    S::Error: Into<E>,
    E: From<InternalError> + 'static,
{
    type Response = S::Response;
    type Error = E;
    type Future = CatchServiceFuture<S::Future, E>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let fault = match guard(|| self.inner.poll_ready(cx)) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(Ok(()))) => return Poll::Ready(Ok(())),
            Ok(Poll::Ready(Err(error))) => Fault::from_error(error.into()),
            Err(payload) => Fault::from_panic(payload),
        };
        Poll::Ready(Err(fault.normalize(&self.options)))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        match guard(|| self.inner.call(request)) {
            Ok(future) => CatchServiceFuture {
                inner: Some(CatchFuture::from_future(future, self.options.clone())),
                failed: None,
            },
            Err(payload) => CatchServiceFuture {
                inner: None,
                failed: Some(Fault::from_panic(payload).normalize(&self.options)),
            },
        }
    }
}

pin_project! {
    /// Future returned by [`CatchService`].
    ///
    /// Either polls the inner response future under a panic guard, or
    /// resolves immediately with the error normalized from a panic in `call`.
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchServiceFuture<F, E> {
        #[pin]
        inner: Option<CaughtFuture<F, E>>,
        failed: Option<E>,
    }
}

impl<F, T, X, E> Future for CatchServiceFuture<F, E>
where
    F: Future<Output = Result<T, X>>,
    X: Into<E>,
    E: From<InternalError> + 'static,
{
    type Output = Result<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Some(error) = this.failed.take() {
            return Poll::Ready(Err(error));
        }
        this.inner
            .as_pin_mut()
            .expect("CatchServiceFuture polled after completion")
            .poll(cx)
    }
}

impl<F, T, X, E> FusedFuture for CatchServiceFuture<F, E>
where
    F: Future<Output = Result<T, X>>,
    X: Into<E>,
    E: From<InternalError> + 'static,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.failed.is_none() && self.inner.as_ref().map_or(true, FusedFuture::is_terminated)
    }
}

/// Extension trait for wrapping services with fault normalization.
pub trait ServiceCatchExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its faults are normalized with `options`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use catch_rail::tower::ServiceCatchExt;
    ///
    /// let wrapped = my_service.normalize_faults(Options::<BoxError>::new());
    /// ```
    fn normalize_faults<E>(self, options: Options<E>) -> CatchService<Self, E>
    where
        Self::Error: Into<E>,
        E: From<InternalError> + 'static,
    {
        CatchService::new(self, options)
    }
}

impl<S, Request> ServiceCatchExt<Request> for S where S: Service<Request> {}
