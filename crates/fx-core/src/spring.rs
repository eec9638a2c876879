//! Damped spring used to ease beam values toward scroll-driven targets.
//!
//! Unlike the particle field, springs integrate with the measured frame
//! time, so they settle in the same wall-clock time at any refresh rate.

/// Unit-mass spring with `stiffness` (k) and `damping` (c).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

// Larger frame gaps (tab in background) are split into steps of this size.
const MAX_STEP_SEC: f32 = 1.0 / 120.0;
const MAX_STEPS: usize = 64;
const REST_EPSILON: f32 = 1e-3;

impl Spring {
    pub fn new(value: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance by `dt_sec` using semi-implicit Euler.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return self.value;
        }
        let steps = ((dt_sec / MAX_STEP_SEC).ceil() as usize).clamp(1, MAX_STEPS);
        let h = dt_sec.min(MAX_STEP_SEC * MAX_STEPS as f32) / steps as f32;
        for _ in 0..steps {
            let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
