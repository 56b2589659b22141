#![forbid(unsafe_code)]

//! Gradient-based trajectory prediction.
//!
//! Given the last two pointer samples and the two reference corners of the
//! revealed region, decide whether the cursor is converging on that region.
//! The test compares line slopes over time: as the cursor closes in on the
//! region, its slope toward one corner must shrink while its slope toward
//! the other grows. Which corner is "decreasing" and which is "increasing"
//! depends on the side of the menu the region opens toward.
//!
//! # Invariants
//!
//! 1. A stationary cursor is never judged to be converging (both
//!    comparisons are strict).
//! 2. The predictor never panics: a vertical sample-to-corner line divides
//!    by zero and yields ±infinity, which participates in the comparisons
//!    with the dividend's sign per IEEE-754; a sample landing exactly on a
//!    corner yields NaN, every comparison against NaN is false, and the
//!    verdict falls back to "not converging".
//!
//! The fallback direction matters: "not converging" means the caller is
//! free to switch the active item immediately, so degenerate geometry
//! favors responsiveness over prediction.

use crate::geometry::{Point, Rect};

/// Side of the menu on which revealed content (a submenu) appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApproachDirection {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

/// Slope of the line drawn from `a` to `b`.
///
/// Plain IEEE-754 division: `±y / 0.0` is ±infinity, `0.0 / 0.0` is NaN.
#[inline]
#[must_use]
pub fn gradient(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

/// Select the `(decreasing, increasing)` reference corners of `rect` for a
/// region opening toward `direction`.
///
/// The names encode the expected slope change as the cursor approaches that
/// side: the slope toward the decreasing corner shrinks over time, the slope
/// toward the increasing corner grows.
#[must_use]
pub fn reference_corners(rect: &Rect, direction: ApproachDirection) -> (Point, Point) {
    match direction {
        ApproachDirection::Top => (rect.top_left(), rect.top_right()),
        ApproachDirection::Bottom => (rect.bottom_right(), rect.bottom_left()),
        ApproachDirection::Left => (rect.bottom_left(), rect.top_left()),
        ApproachDirection::Right => (rect.top_right(), rect.bottom_right()),
    }
}

/// Whether the cursor moved from `previous` to `current` toward the region
/// bounded by the two reference corners.
///
/// True exactly when both slopes changed in their expected direction:
/// shrinking toward `decreasing`, growing toward `increasing`. When either
/// comparison fails the cursor is not converging and the caller should
/// treat the move as safe to act on immediately.
#[must_use]
pub fn is_moving_toward(
    previous: Point,
    current: Point,
    decreasing: Point,
    increasing: Point,
) -> bool {
    gradient(current, decreasing) < gradient(previous, decreasing)
        && gradient(current, increasing) > gradient(previous, increasing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    // Corners of a region attached to the right edge x = 100, spanning
    // y = 0..50, read as (decreasing, increasing) for ApproachDirection::Right.
    const DECREASING: Point = Point::new(100.0, 0.0);
    const INCREASING: Point = Point::new(100.0, 50.0);

    // --- Gradient tests ---

    #[test]
    fn gradient_basic() {
        assert_eq!(gradient(pt(0.0, 0.0), pt(10.0, 5.0)), 0.5);
        assert_eq!(gradient(pt(10.0, 5.0), pt(0.0, 0.0)), 0.5);
        assert_eq!(gradient(pt(0.0, 10.0), pt(10.0, 0.0)), -1.0);
    }

    #[test]
    fn gradient_vertical_line_is_signed_infinity() {
        assert_eq!(gradient(pt(5.0, 0.0), pt(5.0, 10.0)), f64::INFINITY);
        assert_eq!(gradient(pt(5.0, 10.0), pt(5.0, 0.0)), f64::NEG_INFINITY);
    }

    #[test]
    fn gradient_degenerate_is_nan() {
        assert!(gradient(pt(5.0, 5.0), pt(5.0, 5.0)).is_nan());
    }

    // --- Corner selection tests ---

    #[test]
    fn corners_per_direction() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            reference_corners(&rect, ApproachDirection::Top),
            (rect.top_left(), rect.top_right())
        );
        assert_eq!(
            reference_corners(&rect, ApproachDirection::Bottom),
            (rect.bottom_right(), rect.bottom_left())
        );
        assert_eq!(
            reference_corners(&rect, ApproachDirection::Left),
            (rect.bottom_left(), rect.top_left())
        );
        assert_eq!(
            reference_corners(&rect, ApproachDirection::Right),
            (rect.top_right(), rect.bottom_right())
        );
    }

    #[test]
    fn direction_defaults_to_right() {
        assert_eq!(ApproachDirection::default(), ApproachDirection::Right);
    }

    // --- Convergence tests ---

    #[test]
    fn diagonal_move_into_funnel_is_toward() {
        // Cursor drifts right and slightly up, aimed between the corners.
        assert!(is_moving_toward(
            pt(0.0, 25.0),
            pt(10.0, 24.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn vertical_drift_away_is_not_toward() {
        // Slope toward the increasing corner shrinks: not converging.
        assert!(!is_moving_toward(
            pt(0.0, 25.0),
            pt(0.0, 26.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn retreating_move_is_not_toward() {
        assert!(!is_moving_toward(
            pt(10.0, 24.0),
            pt(0.0, 25.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn stationary_cursor_is_not_toward() {
        // Equal samples give equal gradients; strict comparisons fail.
        assert!(!is_moving_toward(
            pt(10.0, 25.0),
            pt(10.0, 25.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn both_inequalities_required() {
        // Straight horizontal move above the funnel: slope toward the top
        // corner grows instead of shrinking, so one comparison fails.
        assert!(!is_moving_toward(
            pt(0.0, -30.0),
            pt(10.0, -30.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn reaching_the_region_edge_resolves_via_infinity() {
        // current.x equals the corners' x: gradients are ±infinity with the
        // dividend's sign, which still reads as converging from inside the
        // funnel.
        assert!(is_moving_toward(
            pt(50.0, 25.0),
            pt(100.0, 25.0),
            DECREASING,
            INCREASING
        ));
    }

    #[test]
    fn sample_on_a_corner_is_not_toward() {
        // NaN gradient: comparisons are false, verdict is "safe to switch".
        assert!(!is_moving_toward(
            pt(100.0, 0.0),
            pt(100.0, 0.0),
            DECREASING,
            INCREASING
        ));
    }
}
