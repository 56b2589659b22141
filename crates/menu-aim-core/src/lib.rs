#![forbid(unsafe_code)]

//! Core: pointer-intent prediction and debounced hover activation.
//!
//! # Role in menu-aim
//! `menu-aim-core` is the decision layer. It owns the trajectory predictor,
//! the activation state machine, and the page-space geometry they share. It
//! binds no events and mutates no presentation state.
//!
//! # Primary responsibilities
//! - **MenuAim**: the activation controller — single active item, debounced
//!   switching, deferred re-checks with cancellable deadlines.
//! - **Trajectory**: gradient-based convergence test between two pointer
//!   samples and a pair of reference corners.
//! - **Geometry**: page-coordinate points, rectangles, and margins.
//! - **Effects**: abstract activate/deactivate/delay requests the event
//!   adapter applies to the host UI.
//!
//! # How it fits in the system
//! A host-specific event adapter measures bounding boxes, feeds pointer
//! samples and enter/click/leave events into [`controller::MenuAim`], and
//! applies the returned [`effect::Effect`] values (marker toggles, user
//! callbacks, timers). The controller is pure state transition over
//! already-measured geometry, so every decision is reproducible in tests
//! without a rendering environment.

pub mod controller;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod trajectory;

pub use controller::{AimConfig, MenuAim};
pub use effect::Effect;
pub use error::{AimError, Result};
pub use geometry::{Margin, Point, Rect, page_rect};
pub use trajectory::{ApproachDirection, gradient, is_moving_toward, reference_corners};

/// Monotonic clock fed to the controller (wasm-safe).
pub use web_time::Instant;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
