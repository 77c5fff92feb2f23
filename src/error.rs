//! Error types for shape construction.

use thiserror::Error;

/// Errors that can occur when constructing a shape.
///
/// Validation runs before any buffer is allocated, so a returned error means
/// nothing was painted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The rectangle is empty or the corner radius does not fit inside it.
    #[error("invalid geometry {width}x{height} with radius {radius}: {reason}")]
    InvalidGeometry {
        width: u32,
        height: u32,
        radius: u32,
        reason: &'static str,
    },

    /// The outline stroke width is zero.
    #[error("invalid stroke width {stroke}: must be at least 1")]
    InvalidStroke { stroke: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_message_names_values() {
        let err = ShapeError::InvalidGeometry {
            width: 8,
            height: 8,
            radius: 5,
            reason: "corner radius exceeds half the shorter side",
        };
        let msg = err.to_string();
        assert!(msg.contains("8x8"), "{msg}");
        assert!(msg.contains("radius 5"), "{msg}");
        assert!(msg.contains("half the shorter side"), "{msg}");
    }

    #[test]
    fn test_stroke_message() {
        let err = ShapeError::InvalidStroke { stroke: 0 };
        assert_eq!(err.to_string(), "invalid stroke width 0: must be at least 1");
    }
}
