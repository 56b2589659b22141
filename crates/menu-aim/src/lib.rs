#![forbid(unsafe_code)]

//! menu-aim public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the decision core from `menu-aim-core` and offers a
//! lightweight prelude for day-to-day usage.
//!
//! The typical integration is an event adapter owned by the host UI: it
//! measures bounding boxes (see [`page_rect`]), registers candidates with
//! [`MenuAim::track`], forwards pointer events to the controller entry
//! points, and applies the returned [`Effect`] values.

// --- Core re-exports -------------------------------------------------------

pub use menu_aim_core::Instant;
pub use menu_aim_core::controller::{AimConfig, MenuAim};
pub use menu_aim_core::effect::Effect;
pub use menu_aim_core::error::{AimError, Result};
pub use menu_aim_core::geometry::{Margin, Point, Rect, page_rect};
pub use menu_aim_core::trajectory::{
    ApproachDirection, gradient, is_moving_toward, reference_corners,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AimConfig, AimError, ApproachDirection, Effect, Instant, Margin, MenuAim, Point, Rect,
        Result, page_rect,
    };

    pub use crate::core;
}

pub use menu_aim_core as core;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_exposes_a_working_controller() {
        let mut aim = MenuAim::new(Rect::new(0.0, 0.0, 100.0, 50.0), AimConfig::default());
        aim.track("file");
        let effects = aim.request_activate(&"file", None, Instant::now()).unwrap();
        assert!(effects.contains(&Effect::Activate("file")));
    }
}
