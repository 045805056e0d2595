//! Camera system for interactive 3D previewing.
//!
//! Provides a free-flight/orbital camera with an always-orthonormal local
//! basis, view/projection matrix construction, a per-tick motion model,
//! bounding-box auto-framing, and frustum extraction.

/// Core camera state, basis maintenance, and matrix construction.
pub mod core;
/// Auto-framing of axis-aligned bounding boxes from six canonical faces.
pub mod framing;
/// View frustum extraction and intersection tests.
pub mod frustum;
/// Motion model: acceleration, speed, velocity, and direct movement.
pub mod motion;
/// Yaw/pitch/roll and orbit rotation operations.
pub mod rotation;

pub use self::core::{Camera, CameraUniform, DEFAULT_FIELD_OF_VIEW, DEFAULT_UP};
pub use framing::BoxFace;
pub use frustum::{Frustum, Plane};
