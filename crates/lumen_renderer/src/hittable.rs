//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal.
    ///
    /// `outward_normal` must be unit length. The stored normal is flipped so it
    /// always points against the incoming ray, and `front_face` remembers
    /// which side was hit.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vec3, material: &'a dyn Material) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            material,
            t,
            front_face,
        }
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("t", &self.t)
            .field("front_face", &self.front_face)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the nearest intersection whose `t` lies strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A list of hittable objects.
///
/// Has no geometry of its own; a hit is the nearest hit of any member.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let closest_so_far = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian, Metal, Sphere};
    use std::sync::Arc;

    fn same_material(a: &dyn Material, b: &dyn Material) -> bool {
        std::ptr::eq(a as *const dyn Material as *const (), b as *const dyn Material as *const ())
    }

    #[test]
    fn test_face_normal_outside() {
        let mat = Lambertian::new(Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, &mat);

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_face_normal_inside() {
        let mat = Lambertian::new(Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 1.0, -Vec3::Z, &mat);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::PRIMARY).is_none());
    }

    #[test]
    fn test_list_returns_nearest() {
        let near: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(1.0, 0.0, 0.0)));
        let far: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.0, 0.0, 1.0), 0.0));

        // Overlapping spheres on the same ray path; the far one is added first
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, far.clone())));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.5), 1.0, near.clone())));
        assert_eq!(world.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, Interval::PRIMARY).expect("ray should hit");

        assert!((rec.t - 0.5).abs() < 1e-9);
        assert!(same_material(rec.material, near.as_ref()));
        assert!(!same_material(rec.material, far.as_ref()));
    }

    #[test]
    fn test_list_respects_interval() {
        let mat: Arc<dyn Material> = Arc::new(Lambertian::new(Color::ONE));
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mat)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(world.hit(&ray, Interval::new(0.001, 5.0)).is_some());
    }

    #[test]
    fn test_clear() {
        let mat: Arc<dyn Material> = Arc::new(Lambertian::new(Color::ONE));
        let mut world = HittableList::default();
        world.add(Box::new(Sphere::new(Vec3::ZERO, 1.0, mat)));
        world.clear();
        assert_eq!(world.len(), 0);
    }
}
