#![no_main]

use libfuzzer_sys::fuzz_target;
use menu_aim_core::geometry::{Point, Rect};
use menu_aim_core::trajectory::{
    ApproachDirection, gradient, is_moving_toward, reference_corners,
};

fuzz_target!(|data: [f64; 8]| {
    let [px, py, cx, cy, x, y, w, h] = data;
    let previous = Point::new(px, py);
    let current = Point::new(cx, cy);
    let rect = Rect::new(x, y, w, h);

    for direction in [
        ApproachDirection::Top,
        ApproachDirection::Bottom,
        ApproachDirection::Left,
        ApproachDirection::Right,
    ] {
        let (decreasing, increasing) = reference_corners(&rect, direction);

        // The predictor must never panic, whatever the geometry.
        let toward = is_moving_toward(previous, current, decreasing, increasing);

        // A stationary cursor is never converging.
        if previous == current {
            assert!(!is_moving_toward(previous, previous, decreasing, increasing));
        }

        // NaN anywhere in the inputs resolves to "not converging".
        let any_nan = [px, py, cx, cy].iter().any(|v| v.is_nan())
            || decreasing.x.is_nan()
            || decreasing.y.is_nan();
        if any_nan {
            assert!(!toward);
        }
    }

    // Gradient must never panic either.
    let _ = gradient(previous, current);
});
