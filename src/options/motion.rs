use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Motion model caps, per local axis (x right, y up, z forward).
pub struct MotionOptions {
    /// Per-axis speed cap.
    pub max_speed: [f32; 3],
    /// Per-axis acceleration cap.
    pub max_acceleration: [f32; 3],
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            max_speed: [1.0, 1.0, 1.0],
            max_acceleration: [0.1, 0.1, 0.1],
        }
    }
}
