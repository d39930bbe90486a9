//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use crate::{Camera, CameraFrame, Hittable, Progress};
use lumen_math::{Color, Interval, Ray};
use rand::RngCore;
use std::time::Instant;

/// Channel range accepted by the 8-bit quantizer.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and accumulating color.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::PRIMARY) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        // Absorbed
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
///
/// Blends white at the horizon into sky blue overhead. This is the only
/// light in the scene.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (255.999 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the linear average of the samples. A sample count of zero is
/// treated as one.
pub fn render_pixel(
    frame: &CameraFrame,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let ray = frame.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, max_depth, rng);
    }

    // Average the samples
    pixel_color / samples as f64
}

/// Simple image buffer for storing render output.
///
/// Pixels hold averaged linear colors; gamma is applied on conversion.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to gamma-corrected RGB bytes, row-major from the top-left.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Render the entire scene to an image buffer.
///
/// Derived camera state is computed fresh for this call. Scanlines are
/// rendered top to bottom; `progress` hears how many remain before each one.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    rng: &mut dyn RngCore,
    progress: &mut dyn Progress,
) -> ImageBuffer {
    let frame = camera.initialize();
    let mut image = ImageBuffer::new(frame.image_width, frame.image_height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        frame.image_width,
        frame.image_height,
        camera.samples_per_pixel,
        camera.max_depth
    );
    let start = Instant::now();

    for y in 0..frame.image_height {
        progress.scanline(frame.image_height - y);
        for x in 0..frame.image_width {
            let color = render_pixel(
                &frame,
                world,
                x,
                y,
                camera.samples_per_pixel,
                camera.max_depth,
                rng,
            );
            image.set(x, y, color);
        }
    }

    progress.finished();
    log::info!("Rendered in {:?}", start.elapsed());

    image
}
