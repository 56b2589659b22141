//! Property-based invariant tests for the trajectory predictor.
//!
//! These tests verify directional invariants of `is_moving_toward`:
//!
//! 1. Horizontal motion aimed between the reference corners is always
//!    judged converging
//! 2. The exact reverse of that motion is never judged converging
//! 3. A stationary cursor is never judged converging
//! 4. No panics on arbitrary inputs, including NaN and infinities

use menu_aim_core::geometry::Point;
use menu_aim_core::trajectory::{gradient, is_moving_toward};
use proptest::prelude::*;

// Corners of a region attached to the right edge x = 100, spanning
// y = 0..50, read as (decreasing, increasing).
const DECREASING: Point = Point::new(100.0, 0.0);
const INCREASING: Point = Point::new(100.0, 50.0);

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// ── Strategies ──────────────────────────────────────────────────────────

/// Start x, step, and height chosen so both samples stay strictly left of
/// the corners and strictly between their y values, with slack comfortably
/// above floating-point noise.
fn funnel_motion() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0..80.0f64, 0.5..19.0f64, 0.5..49.5f64)
}

fn any_point() -> impl Strategy<Value = Point> {
    (-1e6..1e6f64, -1e6..1e6f64).prop_map(|(x, y)| Point::new(x, y))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn level_motion_into_the_funnel_is_toward((x0, dx, y) in funnel_motion()) {
        let previous = pt(x0, y);
        let current = pt(x0 + dx, y);
        prop_assert!(is_moving_toward(previous, current, DECREASING, INCREASING));
    }

    #[test]
    fn reversed_motion_is_never_toward((x0, dx, y) in funnel_motion()) {
        let previous = pt(x0 + dx, y);
        let current = pt(x0, y);
        prop_assert!(!is_moving_toward(previous, current, DECREASING, INCREASING));
    }

    #[test]
    fn stationary_cursor_is_never_toward(p in any_point()) {
        prop_assert!(!is_moving_toward(p, p, DECREASING, INCREASING));
    }

    #[test]
    fn predictor_never_panics(a in any_point(), b in any_point(), c in any_point(), d in any_point()) {
        let _ = is_moving_toward(a, b, c, d);
        let _ = gradient(a, b);
    }

    #[test]
    fn predictor_tolerates_non_finite_samples(x in prop::num::f64::ANY, y in prop::num::f64::ANY) {
        // NaN or infinite coordinates must resolve arithmetically, never
        // panic. NaN in particular always resolves to "not converging".
        let weird = Point::new(x, y);
        let verdict = is_moving_toward(weird, pt(10.0, 24.0), DECREASING, INCREASING);
        if x.is_nan() || y.is_nan() {
            prop_assert!(!is_moving_toward(pt(0.0, 25.0), weird, DECREASING, INCREASING));
        }
        let _ = verdict;
    }
}
