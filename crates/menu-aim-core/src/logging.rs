#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros; without it, no-op macros with the same names are exported at the
//! crate root. Call sites import unconditionally:
//!
//! ```ignore
//! #[cfg(feature = "tracing")]
//! use crate::logging::{debug, trace};
//! #[cfg(not(feature = "tracing"))]
//! use crate::{debug, trace};
//! ```
//!
//! so the controller carries its instrumentation without forcing the
//! dependency on hosts that do not want it.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON subscriber filtered by `RUST_LOG`, for production logs.
///
/// Panics if a global subscriber is already set; call once at startup.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

// No-op fallbacks, exported at the crate root.

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_span {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug_span {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info_span {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn_span {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error_span {
    ($($arg:tt)*) => {{}};
}
