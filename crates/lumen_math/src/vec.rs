//! Sampling and optics helpers layered on `Vec3`.
//!
//! Arithmetic, dot/cross products and normalization come straight from glam.
//! Everything random takes the generator explicitly so a render owns exactly
//! one stream.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Components below this magnitude count as zero for `near_zero`.
const NEAR_ZERO: f64 = 1e-8;

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform sample in [min, max).
#[inline]
pub fn gen_range_f64(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// True if every component is within 1e-8 of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO
}

/// Random vector with each component in [0, 1).
pub fn random_vec(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Random vector with each component in [min, max).
pub fn random_vec_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
    )
}

/// Sample a random point in the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f64(rng, -1.0, 1.0),
            gen_range_f64(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a random point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random unit vector on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // Reject samples too close to the origin to normalize
        let len_sq = p.length_squared();
        if len_sq > 1e-160 {
            return p / len_sq.sqrt();
        }
    }
}

/// Random unit vector on the same side of the surface as `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}

/// Reflect a vector about a unit normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of refractive indices (incident over transmitted).
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
