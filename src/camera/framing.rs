//! Auto-framing: placing the camera so a bounding box fills the view.

use glam::Vec3;

use crate::bounds::Aabb;
use crate::camera::core::Camera;

/// Canonical face of an axis-aligned bounding box to frame the camera
/// against. The set is closed: an invalid face is unrepresentable.
///
/// The previewer is z-up with y as scene depth, so front/back look along
/// y, left/right along x, and top/bottom along z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFace {
    /// +y side, looking along -y.
    Front,
    /// -y side, looking along +y.
    Back,
    /// +x side, looking along -x.
    Left,
    /// -x side, looking along +x.
    Right,
    /// +z side, looking along -z.
    Top,
    /// -z side, looking along +z.
    Bottom,
}

impl Camera {
    /// Position the camera so `aabb` is fully visible from `face` at the
    /// current field of view.
    ///
    /// For the two axes spanning the face, the required standoff is
    /// `half_extent / tan(fov / 2)` plus the box's maximum coordinate
    /// along the viewing axis, so the camera sits just outside the box.
    /// The larger of the width- and height-based standoffs wins, which
    /// guarantees both dimensions fit in the frustum. The up vector is
    /// reset to the face-appropriate default before the basis is
    /// re-derived from the box center.
    pub fn look_at_box(&mut self, aabb: &Aabb, face: BoxFace) {
        let half = aabb.half_size();
        let center = aabb.center();
        let tan_half_fov = (self.field_of_view.to_radians() * 0.5).tan();

        let distance = match face {
            BoxFace::Front | BoxFace::Back => {
                let width = half.x / tan_half_fov + aabb.max.y;
                let height = half.z / tan_half_fov + aabb.max.y;
                width.max(height)
            }
            BoxFace::Left | BoxFace::Right => {
                let width = half.y / tan_half_fov + aabb.max.x;
                let height = half.z / tan_half_fov + aabb.max.x;
                width.max(height)
            }
            BoxFace::Top | BoxFace::Bottom => {
                let width = half.x / tan_half_fov + aabb.max.z;
                let height = half.y / tan_half_fov + aabb.max.z;
                width.max(height)
            }
        };

        match face {
            BoxFace::Front => {
                self.position = Vec3::new(center.x, distance, center.z);
                self.up = Vec3::Z;
            }
            BoxFace::Back => {
                self.position = Vec3::new(center.x, -distance, center.z);
                self.up = Vec3::Z;
            }
            BoxFace::Left => {
                self.position = Vec3::new(distance, center.y, center.z);
                self.up = Vec3::Z;
            }
            BoxFace::Right => {
                self.position = Vec3::new(-distance, center.y, center.z);
                self.up = Vec3::Z;
            }
            BoxFace::Top => {
                self.position = Vec3::new(center.x, center.y, distance);
                self.up = Vec3::Y;
            }
            BoxFace::Bottom => {
                self.position = Vec3::new(center.x, center.y, -distance);
                self.up = Vec3::Y;
            }
        }

        log::debug!(
            "framing {face:?} face at distance {distance} (fov {})",
            self.field_of_view
        );

        self.set_target(center);
    }
}
