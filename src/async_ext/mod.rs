//! Async entry points and extensions.
//!
//! The producer-based entry points live on [`Wrapper`](crate::Wrapper); this
//! module holds the future they return plus the extensions built on it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (on by default):
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use catch_rail::prelude_async::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let result = execute_async(|| async { Ok::<_, std::io::Error>("Mock Data") }).await;
//! assert_eq!(result.unwrap(), "Mock Data");
//! # });
//! ```

mod catch_future;
mod future_ext;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use catch_future::{CatchFuture, CaughtFuture};
pub use future_ext::FutureCatchExt;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{execute_spawned, execute_spawned_with};
