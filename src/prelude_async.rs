//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async entry points.
//!
//! # Usage
//!
//! ```
//! use catch_rail::prelude_async::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let result = WRAPPER
//!     .execute_async(|| async { Err::<(), _>(std::io::Error::other("Async Error")) })
//!     .await;
//! assert_eq!(result.unwrap_err().to_string(), "Async Error");
//! # });
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`catch!`]
//! - **Types**: [`Wrapper`], [`Options`], [`InternalError`], [`BoxError`], [`Outcome`]
//!
//! ## Async-Specific
//!
//! - **Functions**: [`execute_async`](crate::execute_async)
//! - **Traits**: [`FutureCatchExt`](crate::async_ext::FutureCatchExt) - `.catch_faults()` for futures
//! - **Types**: [`CatchFuture`](crate::async_ext::CatchFuture)
//! - **Macros**: [`catch_async!`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{CatchFuture, CaughtFuture, FutureCatchExt};

#[cfg(feature = "async")]
pub use crate::wrapper::execute_async;

#[cfg(feature = "async")]
pub use crate::catch_async;

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::{execute_spawned, execute_spawned_with};
