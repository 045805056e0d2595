//! Motion model and direct movement.
//!
//! The physics path is meant to be driven once per simulation tick:
//! accelerate along local axes, then [`Camera::update_speed`] →
//! [`Camera::update_velocity`] → [`Camera::update_position`]. Speed and
//! acceleration are clamped against their per-axis caps on the upper bound
//! only; negative excursions are never clamped. That asymmetry is
//! deliberate behavioral parity with the previewer this model comes from.
//!
//! Direct movement bypasses the physics state entirely and offsets the
//! position (and optionally the target) immediately.

use glam::Vec3;

use crate::camera::core::Camera;

impl Camera {
    // ── Acceleration ─────────────────────────────────────────────────────

    /// Add forward (local z) acceleration, clamped to the forward cap.
    pub fn accel_forward(&mut self, amount: f32) {
        self.acceleration.z += amount;
        if self.acceleration.z > self.max_acceleration.z {
            self.acceleration.z = self.max_acceleration.z;
        }
    }

    /// Add upward (local y) acceleration, clamped to the upward cap.
    pub fn accel_upward(&mut self, amount: f32) {
        self.acceleration.y += amount;
        if self.acceleration.y > self.max_acceleration.y {
            self.acceleration.y = self.max_acceleration.y;
        }
    }

    /// Add rightward (local x) acceleration, clamped to the rightward cap.
    pub fn accel_right(&mut self, amount: f32) {
        self.acceleration.x += amount;
        if self.acceleration.x > self.max_acceleration.x {
            self.acceleration.x = self.max_acceleration.x;
        }
    }

    /// Forward deceleration. Currently a no-op, kept as an extension
    /// point so drivers can call it symmetrically with
    /// [`Camera::accel_forward`].
    #[allow(clippy::unused_self)]
    pub fn decel_forward(&mut self, _amount: f32) {}

    /// Upward deceleration. Currently a no-op.
    #[allow(clippy::unused_self)]
    pub fn decel_upward(&mut self, _amount: f32) {}

    /// Rightward deceleration. Currently a no-op.
    #[allow(clippy::unused_self)]
    pub fn decel_right(&mut self, _amount: f32) {}

    // ── Per-tick integration ─────────────────────────────────────────────

    /// Integrate acceleration into speed, clamping each axis to its cap.
    pub fn update_speed(&mut self) {
        self.speed += self.acceleration;
        if self.speed.x > self.max_speed.x {
            self.speed.x = self.max_speed.x;
        }
        if self.speed.y > self.max_speed.y {
            self.speed.y = self.max_speed.y;
        }
        if self.speed.z > self.max_speed.z {
            self.speed.z = self.max_speed.z;
        }
    }

    /// Project local-axis speed into a world-space velocity.
    pub fn update_velocity(&mut self) {
        self.velocity = self.look * self.speed.z
            + self.up * self.speed.y
            + self.right * self.speed.x;
    }

    /// Advance the position by the current velocity.
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    // ── Direct movement ──────────────────────────────────────────────────

    /// Offset the position by a world-space vector.
    pub fn move_by(&mut self, movement: Vec3) {
        self.position += movement;
    }

    /// Move the position along the look axis.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.look * distance;
    }

    /// Move the position along the up axis.
    pub fn move_upward(&mut self, distance: f32) {
        self.position += self.up * distance;
    }

    /// Move the position along the right axis.
    pub fn move_right(&mut self, distance: f32) {
        self.position += self.right * distance;
    }

    /// Move the target along the look axis, keeping the position fixed.
    pub fn move_target_forward(&mut self, distance: f32) {
        self.target += self.look * distance;
    }

    /// Move the target along the up axis, keeping the position fixed.
    pub fn move_target_upward(&mut self, distance: f32) {
        self.target += self.up * distance;
    }

    /// Move the target along the right axis, keeping the position fixed.
    pub fn move_target_right(&mut self, distance: f32) {
        self.target += self.right * distance;
    }

    /// Pan position and target together along the look axis.
    pub fn move_cam_and_target_forward(&mut self, distance: f32) {
        self.position += self.look * distance;
        self.target += self.look * distance;
    }

    /// Pan position and target together along the up axis, preserving the
    /// viewing direction.
    pub fn move_cam_and_target_upward(&mut self, distance: f32) {
        self.position += self.up * distance;
        self.target += self.up * distance;
    }

    /// Pan position and target together along the right axis, preserving
    /// the viewing direction.
    pub fn move_cam_and_target_right(&mut self, distance: f32) {
        self.position += self.right * distance;
        self.target += self.right * distance;
    }
}
