//! Axis-aligned bounding volumes consumed by camera framing.

use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (smallest x/y/z).
    pub min: Vec3,
    /// Maximum corner (largest x/y/z).
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its minimum and maximum corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box centered at `center` extending `half_size` along each
    /// axis.
    #[must_use]
    pub fn from_center_half_size(center: Vec3, half_size: Vec3) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Smallest box enclosing all of `points`. Returns `None` for an empty
    /// slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let mut aabb = Self::new(first, first);
        for p in &points[1..] {
            aabb.min = aabb.min.min(*p);
            aabb.max = aabb.max.max(*p);
        }
        Some(aabb)
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half extent of the box along each axis.
    #[must_use]
    pub fn half_size(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// The eight corner points of the box.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_offset_box() {
        let aabb = Aabb::new(Vec3::new(-2.0, 0.0, 4.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(aabb.size(), Vec3::new(4.0, 4.0, 2.0));
        assert_eq!(aabb.half_size(), Vec3::new(2.0, 2.0, 1.0));
    }

    #[test]
    fn from_points_encloses_all() {
        let pts = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-3.0, 2.0, 5.0),
            Vec3::new(0.0, 0.0, -2.0),
        ];
        let aabb = Aabb::from_points(&pts).unwrap();
        assert_eq!(aabb.min, Vec3::new(-3.0, -1.0, -2.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 5.0));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn corners_of_unit_cube() {
        let aabb = Aabb::from_center_half_size(Vec3::ZERO, Vec3::splat(0.5));
        let corners = aabb.corners();
        assert_eq!(corners.len(), 8);
        for c in corners {
            assert_eq!(c.abs(), Vec3::splat(0.5));
        }
    }
}
