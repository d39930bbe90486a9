// Re-export glam for convenience
pub use glam;

/// Double precision vector used for directions and displacements.
pub type Vec3 = glam::DVec3;
/// A position in world space.
pub type Point3 = glam::DVec3;
/// Linear RGB color, nominally in [0, 1] per channel.
pub type Color = glam::DVec3;

// Lumen math types
mod interval;
mod ray;
pub mod vec;

pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }
}
