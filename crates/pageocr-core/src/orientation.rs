//! Orientation - estimated page rotation

/// Estimated rotation of the page content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation in degrees: 0, 90, 180 or 270
    pub rotation: u32,
    /// Confidence value in [0, 1]
    pub confidence: f32,
}

impl Orientation {
    /// Result used when no estimate could be made.
    pub const UNKNOWN: Orientation = Orientation {
        rotation: 0,
        confidence: 0.0,
    };

    /// A confident estimate of `rotation` degrees.
    pub const fn certain(rotation: u32) -> Self {
        Self {
            rotation,
            confidence: 1.0,
        }
    }
}
