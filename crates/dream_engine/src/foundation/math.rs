//! Math utilities and types
//!
//! Scene descriptions only need plain 3D vectors: positions, Euler rotations and
//! per-axis scales all serialize as `[x, y, z]` arrays on the wire.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Convenience constructor used by the generators' literal tables
#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Uniform scale vector
#[inline]
pub fn uniform(s: f32) -> Vec3 {
    Vec3::new(s, s, s)
}

/// Full turn in radians
pub const TAU: f32 = std::f32::consts::TAU;

/// Half turn in radians
pub const PI: f32 = std::f32::consts::PI;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_serializes_as_array() {
        let json = serde_json::to_string(&vec3(1.0, -2.5, 3.0)).unwrap();
        assert_eq!(json, "[1.0,-2.5,3.0]");

        let back: Vec3 = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(back, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_uniform() {
        assert_eq!(uniform(0.1), vec3(0.1, 0.1, 0.1));
    }
}
