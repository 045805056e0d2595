//! View frustum for visibility queries.
//!
//! Extracts frustum planes from a combined view-projection matrix and
//! provides containment tests for points, spheres, and boxes.

use glam::{Mat4, Vec3, Vec4};

use crate::bounds::Aabb;
use crate::camera::core::Camera;

/// A plane in 3D space where the plane equation is `ax + by + cz + d = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let len = coefficients.truncate().length();
        if len > 0.0 {
            Self {
                normal: coefficients.truncate() / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative
    /// = behind).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a combined view-projection matrix.
    /// Uses the Gribb/Hartmann method; planes point inward (positive
    /// half-space is inside the frustum).
    ///
    /// This crate's matrices are row-vector convention (`clip = v * vp`),
    /// so each clip component is a *column* of the matrix and the plane
    /// sums read off the columns directly. The near plane is the bare z
    /// column for the [0, 1] depth range.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let left = vp.w_axis + vp.x_axis;
        let right = vp.w_axis - vp.x_axis;
        let bottom = vp.w_axis + vp.y_axis;
        let top = vp.w_axis - vp.y_axis;
        let near = vp.z_axis;
        let far = vp.w_axis - vp.z_axis;

        Self {
            planes: [
                Plane::from_coefficients(left),
                Plane::from_coefficients(right),
                Plane::from_coefficients(bottom),
                Plane::from_coefficients(top),
                Plane::from_coefficients(near),
                Plane::from_coefficients(far),
            ],
        }
    }

    /// Test if a point is inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum.
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if a box is completely inside the frustum.
    #[must_use]
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        aabb.corners()
            .into_iter()
            .all(|corner| self.contains_point(corner))
    }
}

impl Camera {
    /// Extract the view frustum for the camera's current state.
    ///
    /// Rebuilds the view matrix (with re-orthogonalization) as a side
    /// effect, like the other matrix getters.
    #[must_use]
    pub fn frustum(&mut self) -> Frustum {
        Frustum::from_view_projection(self.mvp_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::framing::BoxFace;

    fn camera_above_origin() -> Camera {
        let mut camera = Camera::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        camera.set_perspective_projection(45.0, 1.0, 0.1, 100.0);
        camera
    }

    #[test]
    fn frustum_contains_the_target() {
        let mut camera = camera_above_origin();
        let frustum = camera.frustum();
        assert!(frustum.contains_point(Vec3::ZERO));
        // A point behind the camera is outside.
        assert!(!frustum.contains_point(Vec3::new(0.0, 20.0, 0.0)));
        // A point beyond the far plane is outside.
        assert!(!frustum.contains_point(Vec3::new(0.0, -200.0, 0.0)));
    }

    #[test]
    fn sphere_intersection() {
        let mut camera = camera_above_origin();
        let frustum = camera.frustum();
        assert!(frustum.intersects_sphere(Vec3::ZERO, 1.0));
        // Sphere fully behind the camera.
        assert!(!frustum.intersects_sphere(Vec3::new(0.0, 50.0, 0.0), 1.0));
        // Off-axis sphere 8 units right of the view axis: the frustum
        // half-width at depth 10 is 10·tan(22.5°) ≈ 4.14, so the sphere
        // sits ≈ 3.57 outside the right plane.
        assert!(frustum.intersects_sphere(Vec3::new(8.0, 0.0, 0.0), 3.9));
        assert!(!frustum.intersects_sphere(Vec3::new(8.0, 0.0, 0.0), 3.0));
    }

    #[test]
    fn framed_box_is_inside_the_frustum() {
        let aabb = Aabb::from_center_half_size(Vec3::ZERO, Vec3::splat(0.5));
        let mut camera = Camera::new(Vec3::splat(4.0), Vec3::ZERO);
        camera.set_field_of_view(60.0);
        camera.look_at_box(&aabb, BoxFace::Front);
        camera.set_perspective_projection(60.0, 1.0, 0.1, 100.0);
        let frustum = camera.frustum();
        // The exact fit puts the near-face corners on the frustum planes;
        // test a slightly shrunken box for strict containment.
        let inner =
            Aabb::from_center_half_size(aabb.center(), aabb.half_size() * 0.95);
        assert!(frustum.contains_aabb(&inner));
    }
}
