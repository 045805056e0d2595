//! Rotation operations on the camera basis.
//!
//! All rotations are angle-axis rotations of the current orthonormal basis.
//! Angles are radians; zero-angle components are skipped. Composite
//! rotation applies yaw → pitch → roll sequentially, each step rotating
//! about the *already updated* basis from the previous step — the order is
//! semantically significant.

use glam::Quat;

use crate::camera::core::Camera;

impl Camera {
    /// Rotate the right and look axes about the current up axis.
    pub fn rotate_yaw(&mut self, yaw: f32) {
        if yaw != 0.0 {
            let rotation = Quat::from_axis_angle(self.up, yaw);
            self.right = rotation * self.right;
            self.look = rotation * self.look;
        }
    }

    /// Rotate the up and look axes about the current right axis.
    pub fn rotate_pitch(&mut self, pitch: f32) {
        if pitch != 0.0 {
            let rotation = Quat::from_axis_angle(self.right, pitch);
            self.up = rotation * self.up;
            self.look = rotation * self.look;
        }
    }

    /// Rotate the up and right axes about the current look axis.
    pub fn rotate_roll(&mut self, roll: f32) {
        if roll != 0.0 {
            let rotation = Quat::from_axis_angle(self.look, roll);
            self.up = rotation * self.up;
            self.right = rotation * self.right;
        }
    }

    /// Apply yaw, pitch, and roll in that order, each about the basis
    /// resulting from the previous step.
    pub fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotate_yaw(yaw);
        self.rotate_pitch(pitch);
        self.rotate_roll(roll);
    }

    /// Orbit the camera position around its target at constant radius.
    ///
    /// The focus vector `position - target` is rotated by yaw about the
    /// current up axis, then by pitch about the current right axis, and
    /// the position is recomputed from the rotated vector. Roll is
    /// accepted but ignored: an orbit camera does not roll.
    pub fn rotate_around_target(&mut self, yaw: f32, pitch: f32, _roll: f32) {
        let mut focus = self.position - self.target;

        if yaw != 0.0 {
            focus = Quat::from_axis_angle(self.up, yaw) * focus;
        }
        if pitch != 0.0 {
            focus = Quat::from_axis_angle(self.right, pitch) * focus;
        }
        self.position = focus + self.target;
        self.set_look_at(self.target);
    }

    /// Orbit the target around the camera position at constant radius,
    /// keeping the position fixed.
    ///
    /// The symmetric counterpart of [`Camera::rotate_around_target`]:
    /// rotates `target - position` and recomputes the target. Roll is
    /// likewise ignored.
    pub fn rotate_target_around(&mut self, yaw: f32, pitch: f32, _roll: f32) {
        let mut focus = self.target - self.position;

        if yaw != 0.0 {
            focus = Quat::from_axis_angle(self.up, yaw) * focus;
        }
        if pitch != 0.0 {
            focus = Quat::from_axis_angle(self.right, pitch) * focus;
        }
        self.target = focus + self.position;
        self.set_look_at(self.target);
    }
}
