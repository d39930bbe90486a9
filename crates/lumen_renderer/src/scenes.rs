//! Built-in scenes.
//!
//! Each preset pairs a world with the camera it was composed for.

use crate::{Camera, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use lumen_math::vec::{gen_f64, gen_range_f64, random_vec, random_vec_range};
use lumen_math::{Color, Point3, Vec3};
use rand::RngCore;
use std::sync::Arc;

/// A named scene and its camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePreset {
    /// Ground plane covered in small random spheres around three large ones
    Cover,
    /// Matte, hollow glass and brushed metal spheres side by side
    Materials,
    /// Two touching spheres seen through a wide lens
    Wide,
    /// One diffuse sphere over the ground
    Single,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 4] = [
        ScenePreset::Cover,
        ScenePreset::Materials,
        ScenePreset::Wide,
        ScenePreset::Single,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Cover => "cover",
            ScenePreset::Materials => "materials",
            ScenePreset::Wide => "wide",
            ScenePreset::Single => "single",
        }
    }

    /// Build the world. Only `Cover` draws from `rng`.
    pub fn build(&self, rng: &mut dyn RngCore) -> HittableList {
        let world = match self {
            ScenePreset::Cover => cover(rng),
            ScenePreset::Materials => materials(),
            ScenePreset::Wide => wide(),
            ScenePreset::Single => single(),
        };
        log::debug!("Built scene '{}' with {} objects", self.name(), world.len());
        world
    }

    /// The camera this scene was composed for.
    pub fn camera(&self) -> Camera {
        match self {
            ScenePreset::Cover => Camera::new()
                .with_resolution(1200, 16.0 / 9.0)
                .with_quality(100, 50)
                .with_position(Point3::new(13.0, 2.0, 3.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
                .with_lens(20.0, 0.6, 10.0),
            ScenePreset::Materials => Camera::new()
                .with_resolution(400, 16.0 / 9.0)
                .with_quality(100, 50)
                .with_position(Point3::new(-2.0, 2.0, 1.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
                .with_lens(20.0, 10.0, 3.4),
            ScenePreset::Wide => Camera::new()
                .with_resolution(400, 16.0 / 9.0)
                .with_quality(100, 50)
                .with_lens(90.0, 0.0, 1.0),
            ScenePreset::Single => Camera::new()
                .with_resolution(400, 16.0 / 9.0)
                .with_quality(100, 50)
                .with_lens(90.0, 0.0, 1.0),
        }
    }
}

fn sphere(center: Point3, radius: f64, material: &Arc<dyn Material>) -> Box<Sphere> {
    Box::new(Sphere::new(center, radius, Arc::clone(material)))
}

fn cover(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, &ground));

    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    world.add(sphere(Point3::new(0.0, 1.0, 0.0), 1.0, &glass));

    let brown: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)));
    world.add(sphere(Point3::new(-4.0, 1.0, 0.0), 1.0, &brown));

    let mirror: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
    world.add(sphere(Point3::new(4.0, 1.0, 0.0), 1.0, &mirror));

    // Keep the small spheres clear of the mirror
    let keep_clear = Point3::new(4.0, 0.2, 0.0);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let material: Arc<dyn Material> = if choose_mat < 0.8 {
                // diffuse
                Arc::new(Lambertian::new(random_vec(rng) * random_vec(rng)))
            } else if choose_mat < 0.95 {
                // metal
                let albedo = random_vec_range(rng, 0.5, 1.0);
                let fuzz = gen_range_f64(rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz))
            } else {
                // glass
                Arc::clone(&glass)
            };
            world.add(sphere(center, 0.2, &material));
        }
    }

    world
}

fn materials() -> HittableList {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let left: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let bubble: Arc<dyn Material> = Arc::new(Dielectric::new(1.0 / 1.5));
    let right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(sphere(Point3::new(0.0, -100.5, -1.0), 100.0, &ground));
    world.add(sphere(Point3::new(0.0, 0.0, -1.2), 0.5, &center));
    world.add(sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, &left));
    world.add(sphere(Point3::new(-1.0, 0.0, -1.0), 0.4, &bubble));
    world.add(sphere(Point3::new(1.0, 0.0, -1.0), 0.5, &right));
    world
}

fn wide() -> HittableList {
    let r = (std::f64::consts::PI / 4.0).cos();
    let blue: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.0, 0.0, 1.0)));
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(1.0, 0.0, 0.0)));

    let mut world = HittableList::new();
    world.add(sphere(Point3::new(-r, 0.0, -1.0), r, &blue));
    world.add(sphere(Point3::new(r, 0.0, -1.0), r, &red));
    world
}

fn single() -> HittableList {
    let grey: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));

    let mut world = HittableList::new();
    world.add(sphere(Point3::new(0.0, 0.0, -1.0), 0.5, &grey));
    world.add(sphere(Point3::new(0.0, -100.5, -1.0), 100.0, &grey));
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use lumen_math::{Interval, Ray};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_scene_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(ScenePreset::Materials.build(&mut rng).len(), 5);
        assert_eq!(ScenePreset::Wide.build(&mut rng).len(), 2);
        assert_eq!(ScenePreset::Single.build(&mut rng).len(), 2);
    }

    #[test]
    fn test_cover_scene() {
        let mut rng = StdRng::seed_from_u64(0);
        let world = ScenePreset::Cover.build(&mut rng);

        // Four large spheres plus at most a 22x22 grid of small ones
        assert!(world.len() > 4 + 400);
        assert!(world.len() <= 4 + 22 * 22);

        // Straight down from above the origin lands on the glass sphere at y = 2
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = world.hit(&ray, Interval::PRIMARY).expect("hits the glass sphere");
        assert!((rec.t - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_cameras_render_sized() {
        for preset in ScenePreset::ALL {
            let frame = preset.camera().initialize();
            assert!(frame.image_width >= 400, "{}", preset.name());
            assert!(frame.image_height >= 1, "{}", preset.name());
        }
        assert_eq!(ScenePreset::Cover.camera().image_height(), 675);
    }

    #[test]
    fn test_single_scene_center_hit() {
        let mut rng = StdRng::seed_from_u64(0);
        let world = ScenePreset::Single.build(&mut rng);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, Interval::PRIMARY).expect("hits the sphere");
        assert!((rec.t - 0.5).abs() < 1e-9);
    }
}
