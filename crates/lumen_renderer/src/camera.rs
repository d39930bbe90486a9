//! Camera for ray generation.
//!
//! `Camera` is the user-facing configuration. `Camera::initialize` turns it
//! into a `CameraFrame`, the derived view basis and pixel grid that a single
//! render uses to generate rays.

use lumen_math::vec::{gen_f64, random_in_unit_disk};
use lumen_math::{Point3, Ray, Vec3};
use rand::RngCore;

/// Camera configuration.
///
/// Every field has a default; set the ones you care about before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Count of random samples for each pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into scene
    pub max_depth: u32,

    // Camera positioning
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Point camera is looking from
    pub look_from: Point3,
    /// Point camera is looking at
    pub look_at: Point3,
    /// Camera-relative "up" direction
    pub vup: Vec3,

    // Lens settings
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f64,
    /// Distance from camera look_from point to plane of perfect focus
    pub focus_dist: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }

    /// Set image width and aspect ratio; the height is derived.
    pub fn with_resolution(mut self, width: u32, aspect_ratio: f64) -> Self {
        self.image_width = width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Image height derived from width and aspect ratio, never below 1.
    pub fn image_height(&self) -> u32 {
        let height = (self.image_width as f64 / self.aspect_ratio) as u32;
        height.max(1)
    }

    /// Derive the view basis and pixel grid for one render.
    ///
    /// Pure: the same configuration always yields the same frame.
    pub fn initialize(&self) -> CameraFrame {
        let image_width = self.image_width.max(1);
        let image_height = self.image_height();
        let center = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        // Calculate camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        // Calculate viewport vectors (v runs down the image)
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        // Calculate upper left pixel location
        let viewport_upper_left =
            center - self.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();

        CameraFrame {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_angle: self.defocus_angle,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived camera state, valid for the render it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub image_width: u32,
    pub image_height: u32,
    /// Camera center
    pub center: Point3,
    /// Location of pixel 0, 0
    pub pixel00_loc: Point3,
    /// Offset to pixel to the right
    pub pixel_delta_u: Vec3,
    /// Offset to pixel below
    pub pixel_delta_v: Vec3,
    /// Camera frame basis vectors
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
    defocus_angle: f64,
    /// Defocus disk horizontal radius
    pub defocus_disk_u: Vec3,
    /// Defocus disk vertical radius
    pub defocus_disk_v: Vec3,
}

impl CameraFrame {
    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The ray starts on the defocus disk (or the camera center when there is
    /// no defocus) and passes through a random point in the pixel's square.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f64) + offset.x) * self.pixel_delta_u
            + ((j as f64) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Nominal center of pixel (i, j) on the focus plane.
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.pixel00_loc + (i as f64) * self.pixel_delta_u + (j as f64) * self.pixel_delta_v
    }
}

/// Sample a random point in the unit square [-0.5, 0.5) x [-0.5, 0.5).
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng) - 0.5, gen_f64(rng) - 0.5, 0.0)
}
