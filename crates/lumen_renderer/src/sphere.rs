//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use lumen_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// A sphere primitive.
///
/// The material is shared, so many spheres can point at one instance.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use lumen_math::vec::{random_unit_vector, random_vec_range};
    use lumen_math::{Color, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grey() -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::PRIMARY).expect("should hit");
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::PRIMARY).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::PRIMARY).expect("should hit");
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::X);
    }

    #[test]
    fn test_sphere_tangent_ray() {
        // Grazes the top of the sphere: discriminant is exactly zero
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, grey());
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::PRIMARY).expect("tangent ray hits");
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.p, Vec3::new(0.0, 1.0, -2.0));

        // The single root is rejected when it falls outside the window
        assert!(sphere.hit(&ray, Interval::new(0.001, 1.5)).is_none());
    }

    #[test]
    fn test_sphere_interval_is_exclusive() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root at exactly t_max is rejected; the far root is out of range too
        assert!(sphere.hit(&ray, Interval::new(0.001, 0.5)).is_none());
        // Near root at exactly t_min falls through to the far root
        let rec = sphere.hit(&ray, Interval::new(0.5, 10.0)).expect("far root");
        assert!((rec.t - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_hit_properties() {
        let mut rng = StdRng::seed_from_u64(21);
        let center = Vec3::new(0.5, -0.25, -3.0);
        let radius = 1.25;
        let sphere = Sphere::new(center, radius, grey());

        let mut hits = 0;
        for _ in 0..2000 {
            let origin = random_vec_range(&mut rng, -4.0, 4.0);
            let ray = Ray::new(origin, random_unit_vector(&mut rng) * 2.0);
            if let Some(rec) = sphere.hit(&ray, Interval::PRIMARY) {
                hits += 1;
                let p = ray.at(rec.t);
                assert!(((p - center).length() - radius).abs() < 1e-9);
                assert!((rec.normal.length() - 1.0).abs() < 1e-9);
                if rec.front_face {
                    assert!(ray.direction().dot(rec.normal) < 0.0);
                } else {
                    assert!(ray.direction().dot(rec.normal) <= 0.0);
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = Sphere::new(Vec3::ZERO, -1.0, grey());
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(sphere.center(), Vec3::ZERO);
    }
}
