//! Shorthand macros over the wrapper entry points.
//!
//! - [`macro@crate::catch`] - Runs a `Result`-producing block through
//!   [`Wrapper::execute_sync`](crate::Wrapper::execute_sync).
//! - [`macro@crate::catch_async`] - Runs a `Result`-producing async block
//!   through [`Wrapper::execute_async`](crate::Wrapper::execute_async).
//!
//! Both use the process-wide [`WRAPPER`](crate::WRAPPER) unless a wrapper is
//! named before `=>`.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, Options, Wrapper};
//!
//! let result = catch!({
//!     let port: u16 = "8080".parse()?;
//!     Ok::<_, std::num::ParseIntError>(port)
//! });
//! assert_eq!(result.unwrap(), 8080);
//!
//! let wrapper: Wrapper<String> = Wrapper::with_defaults(Options::new().with_transform(|e: String| e.to_uppercase()));
//! let result = catch!(wrapper => Err::<(), _>("denied".to_string()));
//! assert_eq!(result, Err("DENIED".to_string()));
//! ```

/// Runs a `Result`-producing expression or block through a wrapper.
///
/// # Syntax
///
/// - `catch!(expr)` - Uses [`WRAPPER`](crate::WRAPPER)
/// - `catch!(wrapper => expr)` - Uses the given wrapper's defaults
///
/// The expression becomes the body of the producer closure, so `?` inside a
/// block returns from the producer, not from the enclosing function.
///
/// # Examples
///
/// ```rust
/// use catch_rail::catch;
///
/// let result = catch!({
///     let items: Vec<u8> = Vec::new();
///     Ok::<_, std::io::Error>(items[3])
/// });
/// assert_eq!(result.unwrap_err().to_string(), "internal error");
/// ```
#[macro_export]
macro_rules! catch {
    ($wrapper:expr => $body:expr $(,)?) => {
        $wrapper.execute_sync(|| $body)
    };
    ($body:expr $(,)?) => {
        $crate::WRAPPER.execute_sync(|| $body)
    };
}

/// Runs a `Result`-producing async expression or block through a wrapper.
///
/// The body is placed in an `async move` block; the returned future must be
/// awaited.
///
/// # Examples
///
/// ```rust
/// use catch_rail::catch_async;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result = catch_async!({ Ok::<_, std::io::Error>("Mock Data") }).await;
/// assert_eq!(result.unwrap(), "Mock Data");
/// # });
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! catch_async {
    ($wrapper:expr => $body:expr $(,)?) => {
        $wrapper.execute_async(|| async move { $body })
    };
    ($body:expr $(,)?) => {
        $crate::WRAPPER.execute_async(|| async move { $body })
    };
}
