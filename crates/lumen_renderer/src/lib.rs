//! Lumen renderer - CPU path tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metal and glass
//! materials, lit only by a sky gradient.

mod camera;
mod hittable;
mod material;
pub mod output;
mod renderer;
pub mod scenes;
mod sphere;

pub use camera::{Camera, CameraFrame};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{NoProgress, OutputError, OutputResult, Progress, StderrProgress, TextProgress};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
};
pub use scenes::ScenePreset;
pub use sphere::Sphere;

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
