#![forbid(unsafe_code)]

//! Activation controller: the debounced hover state machine.
//!
//! [`MenuAim`] owns the single active-item slot and decides, on every hover
//! of a sibling candidate, whether to switch immediately or hold off while
//! the cursor is still travelling toward the active item's revealed region.
//! An inconclusive trajectory defers the switch and re-evaluates after a
//! configured delay; anything that makes the trajectory evidence unreliable
//! (no samples yet, cursor entering from outside the menu, a stationary
//! cursor) resolves in favor of switching right away.
//!
//! # State Machine
//!
//! Three states: `Idle` (no active item), `Active`, and `Active` with a
//! pending deferred switch. Hovering from `Idle` activates synchronously.
//! Hovering a sibling while `Active` consults the trajectory predictor and
//! either switches or schedules a re-check. Clicks bypass prediction
//! entirely. Leaving the effective region (menu bounds plus the active
//! item's revealed rect) deactivates.
//!
//! # Timing
//!
//! The deferred re-check is a deadline, not a thread: the adapter calls
//! [`MenuAim::poll`] from its event loop (or arms a one-shot timer for
//! [`MenuAim::pending_deadline`] and polls when it fires). Every activation
//! entry point supersedes an outstanding deadline, so a cancelled re-check
//! can never touch state.
//!
//! # Invariants
//!
//! 1. At most one candidate is active at any observation point; a switch
//!    emits `Deactivate` for the old item before `Activate` for the new.
//! 2. At most one deferred re-check is outstanding at a time.
//! 3. Insufficient trajectory information always switches immediately
//!    (responsiveness wins when prediction is unreliable).
//! 4. After [`MenuAim::teardown`] every operation fails fast and no
//!    deferred re-check fires.
//!
//! # Usage
//!
//! ```
//! use menu_aim_core::controller::{AimConfig, MenuAim};
//! use menu_aim_core::effect::Effect;
//! use menu_aim_core::geometry::{Point, Rect};
//! use web_time::Instant;
//!
//! // Menu occupying x = 0..120, submenus opening to the right.
//! let mut aim = MenuAim::new(Rect::new(0.0, 0.0, 120.0, 300.0), AimConfig::default());
//! aim.track("file");
//! aim.track("edit");
//!
//! let now = Instant::now();
//!
//! // Nothing is active yet: the first hover activates synchronously.
//! let effects = aim.request_activate(&"file", None, now)?;
//! assert!(effects.contains(&Effect::Activate("file")));
//!
//! // Two samples drifting toward the submenu edge.
//! aim.record_sample(Point::new(40.0, 150.0))?;
//! aim.record_sample(Point::new(60.0, 149.0))?;
//!
//! // Hovering a sibling now defers the switch instead of stealing it.
//! let effects = aim.request_activate(&"edit", None, now)?;
//! assert!(matches!(effects.last(), Some(Effect::DelayScheduled { .. })));
//! assert!(aim.is_active(&"file"));
//! # Ok::<(), menu_aim_core::error::AimError>(())
//! ```

use std::fmt;
use std::time::Duration;

use web_time::Instant;

use crate::effect::Effect;
use crate::error::{AimError, Result};
use crate::geometry::{Margin, Point, Rect};
use crate::trajectory::{ApproachDirection, is_moving_toward, reference_corners};

// Import tracing macros (no-op when tracing feature is disabled).
#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for the activation controller.
#[derive(Debug, Clone)]
pub struct AimConfig {
    /// Wait before a deferred activation is re-evaluated (default: 200ms).
    pub delay: Duration,
    /// Side of the menu on which revealed content opens (default: right).
    pub direction: ApproachDirection,
    /// Extra slack around the menu bounds still treated as inside
    /// (default: zero). Useful when items sit flush against the menu edge
    /// and cursors briefly overshoot it.
    pub bounds_margin: Margin,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            direction: ApproachDirection::Right,
            bounds_margin: Margin::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// The currently active item plus the geometry frozen at activation time.
struct ActiveItem<T> {
    item: T,
    /// `(decreasing, increasing)` reference corners of the revealed region.
    corners: (Point, Point),
    /// The revealed region itself, if the item opened one.
    revealed: Option<Rect>,
}

/// A deferred switch awaiting its re-check deadline.
struct PendingSwitch<T> {
    candidate: T,
    revealed: Option<Rect>,
    deadline: Instant,
}

// ---------------------------------------------------------------------------
// MenuAim
// ---------------------------------------------------------------------------

/// The activation controller.
///
/// Generic over an opaque candidate handle `T`; two handles for the same
/// on-screen item must compare equal. The controller references candidates
/// but never creates or destroys them.
///
/// Not thread-safe: confine it to the thread that delivers input events.
pub struct MenuAim<T> {
    config: AimConfig,
    /// Menu container bounds in page space, unexpanded.
    container: Rect,
    /// Candidates registered by the adapter.
    candidates: Vec<T>,

    active: Option<ActiveItem<T>>,
    pending: Option<PendingSwitch<T>>,

    /// The two most recent pointer samples.
    previous: Option<Point>,
    current: Option<Point>,
    /// Where the predictor last ran without a conclusive verdict.
    last_checked: Option<Point>,

    torn_down: bool,
}

impl<T> fmt::Debug for MenuAim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAim")
            .field("candidates", &self.candidates.len())
            .field("active", &self.active.is_some())
            .field("pending", &self.pending.is_some())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl<T: Clone + PartialEq> MenuAim<T> {
    /// Create a controller for a menu occupying `container` (page space).
    #[must_use]
    pub fn new(container: Rect, config: AimConfig) -> Self {
        Self {
            config,
            container,
            candidates: Vec::new(),
            active: None,
            pending: None,
            previous: None,
            current: None,
            last_checked: None,
            torn_down: false,
        }
    }

    /// Register a candidate handle. Duplicates are ignored.
    pub fn track(&mut self, candidate: T) {
        if !self.is_tracked(&candidate) {
            self.candidates.push(candidate);
        }
    }

    /// Register several candidate handles at once.
    pub fn track_all<I: IntoIterator<Item = T>>(&mut self, candidates: I) {
        for candidate in candidates {
            self.track(candidate);
        }
    }

    /// Whether the handle has been registered with [`track`](Self::track).
    #[must_use]
    pub fn is_tracked(&self, candidate: &T) -> bool {
        self.candidates.iter().any(|c| c == candidate)
    }

    /// Record a pointer sample, shifting current to previous.
    ///
    /// Pure bookkeeping: never triggers activation by itself. Call on every
    /// pointer move.
    pub fn record_sample(&mut self, point: Point) -> Result<()> {
        self.ensure_live()?;
        self.previous = self.current.replace(point);
        Ok(())
    }

    /// Debounced activation attempt; call on pointer-enter of a candidate.
    ///
    /// `revealed` is the page-space rect of the region this candidate opens
    /// when it becomes active (measured by the adapter), or `None` when the
    /// menu bounds stand in for it. From `Idle` the candidate activates
    /// synchronously. While another item is active, an inconclusive
    /// trajectory schedules a deferred re-check instead of switching; any
    /// outstanding re-check is superseded first.
    pub fn request_activate(
        &mut self,
        candidate: &T,
        revealed: Option<Rect>,
        now: Instant,
    ) -> Result<Vec<Effect<T>>> {
        self.ensure_live()?;
        self.ensure_tracked(candidate)?;

        let mut out = Vec::with_capacity(4);
        out.push(Effect::Enter(candidate.clone()));

        // Any new activation attempt supersedes an outstanding re-check.
        self.cancel_pending(&mut out);

        if self.is_active(candidate) {
            return Ok(out);
        }

        self.attempt_switch(candidate.clone(), revealed, now, &mut out);
        Ok(out)
    }

    /// Unconditional activation; call on click/select of a candidate.
    ///
    /// Cancels any deferred re-check and activates regardless of
    /// trajectory.
    pub fn request_immediate_activate(
        &mut self,
        candidate: &T,
        revealed: Option<Rect>,
    ) -> Result<Vec<Effect<T>>> {
        self.ensure_live()?;
        self.ensure_tracked(candidate)?;

        let mut out = Vec::with_capacity(3);
        self.cancel_pending(&mut out);
        if !self.is_active(candidate) {
            self.activate(candidate.clone(), revealed, &mut out);
        }
        Ok(out)
    }

    /// Deactivate if `point` lies outside the effective region.
    ///
    /// The effective region is the margin-expanded menu bounds plus the
    /// active item's revealed rect. Call on pointer-leave, scroll, or
    /// outside-click.
    pub fn request_deactivate_if_outside(&mut self, point: Point) -> Result<Vec<Effect<T>>> {
        self.ensure_live()?;

        let mut out = Vec::with_capacity(3);
        if self.effective_region_contains(point) {
            return Ok(out);
        }

        self.cancel_pending(&mut out);
        if let Some(active) = self.active.take() {
            trace!("pointer left the effective region");
            out.push(Effect::Leave(active.item.clone()));
            out.push(Effect::Deactivate(active.item));
            self.last_checked = None;
        }
        Ok(out)
    }

    /// Fire the deferred re-check if its deadline has passed.
    ///
    /// Re-evaluates the deferred candidate: either the switch goes through
    /// now, or the trajectory is still converging and a new deadline is
    /// scheduled. Before the deadline (or with nothing pending) this is a
    /// no-op, so it is safe to call on every tick.
    pub fn poll(&mut self, now: Instant) -> Result<Vec<Effect<T>>> {
        self.ensure_live()?;

        let mut out = Vec::with_capacity(3);
        if !self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return Ok(out);
        }
        let Some(PendingSwitch {
            candidate, revealed, ..
        }) = self.pending.take()
        else {
            return Ok(out);
        };

        if self.should_change() {
            out.push(Effect::DelayCleared);
            self.activate(candidate, revealed, &mut out);
        } else {
            let deadline = now + self.config.delay;
            trace!(
                delay_ms = self.config.delay.as_millis() as u64,
                "trajectory still converging, re-check re-armed"
            );
            self.pending = Some(PendingSwitch {
                candidate,
                revealed,
                deadline,
            });
            out.push(Effect::DelayScheduled { deadline });
        }
        Ok(out)
    }

    /// Deadline of the outstanding deferred re-check, if any.
    ///
    /// Adapters that would rather arm a one-shot timer than poll every tick
    /// wake up at this instant and call [`poll`](Self::poll).
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Cancel any deferred re-check and retire the controller.
    ///
    /// Idempotent. Every other operation fails with
    /// [`AimError::TornDown`] afterward.
    pub fn teardown(&mut self) -> Vec<Effect<T>> {
        let mut out = Vec::with_capacity(1);
        if !self.torn_down {
            debug!("controller torn down");
            self.cancel_pending(&mut out);
            self.torn_down = true;
        }
        out
    }

    /// The currently active candidate, if any.
    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.active.as_ref().map(|a| &a.item)
    }

    /// Whether `candidate` is the active item.
    #[must_use]
    pub fn is_active(&self, candidate: &T) -> bool {
        self.active.as_ref().is_some_and(|a| &a.item == candidate)
    }

    /// Whether the controller has been retired.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The menu bounds expanded by the configured margin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.container.expanded(self.config.bounds_margin)
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AimConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Internal transitions
// ---------------------------------------------------------------------------

impl<T: Clone + PartialEq> MenuAim<T> {
    fn ensure_live(&self) -> Result<()> {
        if self.torn_down {
            return Err(AimError::TornDown);
        }
        Ok(())
    }

    fn ensure_tracked(&self, candidate: &T) -> Result<()> {
        if !self.is_tracked(candidate) {
            return Err(AimError::UnknownCandidate);
        }
        Ok(())
    }

    /// Switch now, or defer if the cursor is converging on the active
    /// item's revealed region.
    fn attempt_switch(
        &mut self,
        candidate: T,
        revealed: Option<Rect>,
        now: Instant,
        out: &mut Vec<Effect<T>>,
    ) {
        if self.should_change() {
            self.activate(candidate, revealed, out);
        } else {
            let deadline = now + self.config.delay;
            trace!(
                delay_ms = self.config.delay.as_millis() as u64,
                "cursor converging on revealed region, switch deferred"
            );
            self.pending = Some(PendingSwitch {
                candidate,
                revealed,
                deadline,
            });
            out.push(Effect::DelayScheduled { deadline });
        }
    }

    /// Whether the active item should yield right now.
    ///
    /// Defaults to true whenever the trajectory evidence is unreliable: no
    /// sample pair yet, the cursor entered from outside the menu bounds, or
    /// the cursor has not moved since the last inconclusive check.
    fn should_change(&mut self) -> bool {
        let Some(active) = &self.active else {
            return true;
        };
        let (Some(previous), Some(current)) = (self.previous, self.current) else {
            return true;
        };
        if !self.bounds().contains(previous) {
            return true;
        }
        if self.last_checked == Some(current) {
            return true;
        }

        let (decreasing, increasing) = active.corners;
        if is_moving_toward(previous, current, decreasing, increasing) {
            self.last_checked = Some(current);
            return false;
        }
        self.last_checked = None;
        true
    }

    fn activate(&mut self, candidate: T, revealed: Option<Rect>, out: &mut Vec<Effect<T>>) {
        if let Some(previous) = self.active.take() {
            out.push(Effect::Deactivate(previous.item));
        }
        let region = revealed.unwrap_or_else(|| self.bounds());
        let corners = reference_corners(&region, self.config.direction);
        out.push(Effect::Activate(candidate.clone()));
        self.active = Some(ActiveItem {
            item: candidate,
            corners,
            revealed,
        });
        self.last_checked = None;
        trace!("active item switched");
    }

    fn cancel_pending(&mut self, out: &mut Vec<Effect<T>>) {
        if self.pending.take().is_some() {
            out.push(Effect::DelayCleared);
        }
    }

    fn effective_region_contains(&self, point: Point) -> bool {
        if self.bounds().contains(point) {
            return true;
        }
        self.active
            .as_ref()
            .and_then(|active| active.revealed)
            .is_some_and(|region| region.contains(point))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
