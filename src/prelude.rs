//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use catch_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`catch!`]
//! - **Types**: [`Wrapper`], [`Options`], [`InternalError`], [`BoxError`], [`Outcome`]
//! - **Statics and functions**: [`WRAPPER`], [`create_wrapper`], [`execute_sync`]
//!
//! # Examples
//!
//! ```
//! use catch_rail::prelude::*;
//!
//! fn load_config() -> Outcome<String> {
//!     execute_sync(|| std::fs::read_to_string("config.toml"))
//! }
//!
//! let _ = load_config();
//! ```

// Macros
pub use crate::catch;

// Core types
pub use crate::types::{BoxError, InternalError, Options, Outcome, Transform};
pub use crate::wrapper::{create_wrapper, execute_sync, Wrapper, WRAPPER};
