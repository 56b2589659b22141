#![forbid(unsafe_code)]

//! Side effects requested of the event adapter.
//!
//! The controller never mutates presentation state. Every transition
//! returns a sequence of [`Effect`] values describing what the adapter
//! should do: toggle an active marker, fire a user callback, apply or clear
//! the transient delaying marker, arm a wake-up timer. Applying them in
//! order reproduces the decision exactly, which keeps every controller
//! property checkable without a rendering environment.
//!
//! # Invariants
//!
//! 1. `Activate` for a new item is always preceded in the same batch by
//!    `Deactivate` for the previously active item, if there was one.
//! 2. Every delay episode ends with exactly one `DelayCleared`; a
//!    `DelayScheduled` following another without an intervening clear only
//!    extends the deadline (the marker is already applied).

use web_time::Instant;

/// An abstract side effect the adapter must apply to the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// The pointer entered a candidate; fire the enter hook.
    Enter(T),

    /// The pointer left the effective region while this item was active;
    /// fire the leave hook.
    Leave(T),

    /// Mark the candidate active and fire the activate hook.
    Activate(T),

    /// Remove the active marker and fire the deactivate hook.
    Deactivate(T),

    /// A switch was deferred: apply the delaying marker to the menu and
    /// optionally arm a one-shot wake-up for `deadline` (then call
    /// `poll`).
    DelayScheduled { deadline: Instant },

    /// The deferred switch resolved or was superseded: remove the delaying
    /// marker.
    DelayCleared,
}

impl<T> Effect<T> {
    /// Returns true if this effect changes which item is active.
    #[must_use]
    pub fn is_activation_change(&self) -> bool {
        matches!(self, Self::Activate(_) | Self::Deactivate(_))
    }

    /// Returns true if this effect manages the delaying marker.
    #[must_use]
    pub fn is_delay(&self) -> bool {
        matches!(self, Self::DelayScheduled { .. } | Self::DelayCleared)
    }

    /// Returns the candidate this effect refers to, if it has one.
    #[must_use]
    pub fn candidate(&self) -> Option<&T> {
        match self {
            Self::Enter(item) | Self::Leave(item) | Self::Activate(item) | Self::Deactivate(item) => {
                Some(item)
            }
            Self::DelayScheduled { .. } | Self::DelayCleared => None,
        }
    }
}
