#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use menu_aim_core::Instant;
use menu_aim_core::controller::{AimConfig, MenuAim};
use menu_aim_core::effect::Effect;
use menu_aim_core::geometry::{Point, Rect};

/// Adapter operations, including out-of-range candidates and degenerate
/// coordinates.
#[derive(Debug, Arbitrary)]
enum Op {
    Sample { x: f64, y: f64 },
    Hover { id: u8, with_submenu: bool },
    Click { id: u8 },
    LeaveAt { x: f64, y: f64 },
    AdvanceAndPoll { ms: u16 },
    Teardown,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut aim = MenuAim::new(Rect::new(0.0, 0.0, 100.0, 50.0), AimConfig::default());
    aim.track_all([0u8, 1, 2, 3]);

    let submenu = Rect::new(100.0, 0.0, 80.0, 50.0);
    let mut now = Instant::now();
    let mut torn_down = false;
    let mut marked_active: Option<u8> = None;

    for op in ops {
        let effects = match op {
            Op::Sample { x, y } => {
                let result = aim.record_sample(Point::new(x, y));
                assert_eq!(result.is_err(), torn_down);
                Vec::new()
            }
            Op::Hover { id, with_submenu } => {
                let revealed = with_submenu.then_some(submenu);
                match aim.request_activate(&(id % 5), revealed, now) {
                    Ok(effects) => effects,
                    Err(_) => Vec::new(),
                }
            }
            Op::Click { id } => match aim.request_immediate_activate(&(id % 5), None) {
                Ok(effects) => effects,
                Err(_) => Vec::new(),
            },
            Op::LeaveAt { x, y } => aim
                .request_deactivate_if_outside(Point::new(x, y))
                .unwrap_or_default(),
            Op::AdvanceAndPoll { ms } => {
                now += Duration::from_millis(u64::from(ms));
                aim.poll(now).unwrap_or_default()
            }
            Op::Teardown => {
                let effects = aim.teardown();
                torn_down = true;
                effects
            }
        };

        // Replay effects onto a single marker slot: activation pairs must
        // balance and never double-apply.
        for effect in &effects {
            match effect {
                Effect::Activate(item) => {
                    assert!(marked_active.is_none());
                    marked_active = Some(*item);
                }
                Effect::Deactivate(item) => {
                    assert_eq!(marked_active, Some(*item));
                    marked_active = None;
                }
                _ => {}
            }
        }
        assert_eq!(marked_active, aim.active().copied());

        if torn_down {
            assert!(aim.pending_deadline().is_none());
        }
    }
});
