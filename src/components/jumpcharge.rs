//! Charge-and-release jump state.
//!
//! Holding the jump key accumulates an upward (negative) power; releasing it
//! hands the power to the caller to be applied as vertical velocity.
//!
//! ```text
//!            key down                     key held
//!   Idle ─────────────────▶ Charging ◀──────────────┐
//!    ▲   (power = 0)           │   (power -= rate,  │
//!    │                         │    clamp at max) ──┘
//!    └─────────────────────────┘
//!       key up: velocity.y = power
//! ```

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct JumpCharge {
    /// True while the jump key is held.
    pub charging: bool,
    /// Accumulated power, in `[max_power, 0]`.
    pub power: f32,
}

impl JumpCharge {
    /// Feed one frame of "jump key held".
    ///
    /// On the first held frame the power is reset. Every held frame, including
    /// the first, subtracts `rate` and clamps at `max_power` (a negative
    /// number: the strongest upward velocity allowed).
    pub fn hold(&mut self, rate: f32, max_power: f32) {
        if !self.charging {
            self.charging = true;
            self.power = 0.0;
        }
        self.power -= rate;
        if self.power < max_power {
            self.power = max_power;
        }
    }

    /// Feed one frame of "jump key not held".
    ///
    /// Returns the charged power if a charge was in progress, which is the
    /// velocity the jump should apply.
    pub fn release(&mut self) -> Option<f32> {
        if self.charging {
            self.charging = false;
            Some(self.power)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_release_without_charge_is_noop() {
        let mut jc = JumpCharge::default();
        assert_eq!(jc.release(), None);
        assert!(!jc.charging);
    }

    #[test]
    fn test_first_hold_resets_and_charges() {
        let mut jc = JumpCharge {
            charging: false,
            power: -17.0,
        };
        jc.hold(0.5, -30.0);
        assert!(jc.charging);
        assert!(approx_eq(jc.power, -0.5));
    }

    #[test]
    fn test_power_is_linear_until_clamp() {
        for frames in [1_u32, 10, 37, 59, 60] {
            let mut jc = JumpCharge::default();
            for _ in 0..frames {
                jc.hold(0.5, -30.0);
            }
            let released = jc.release().unwrap();
            assert!(approx_eq(released, -0.5 * frames as f32), "frames={frames}");
        }
    }

    #[test]
    fn test_power_clamps_at_max() {
        let mut jc = JumpCharge::default();
        for _ in 0..100 {
            jc.hold(0.5, -30.0);
            assert!(jc.power >= -30.0);
        }
        assert_eq!(jc.release(), Some(-30.0));
        assert!(!jc.charging);
    }

    #[test]
    fn test_second_charge_starts_from_zero() {
        let mut jc = JumpCharge::default();
        for _ in 0..20 {
            jc.hold(0.5, -30.0);
        }
        jc.release();
        jc.hold(0.5, -30.0);
        assert!(approx_eq(jc.power, -0.5));
    }
}
