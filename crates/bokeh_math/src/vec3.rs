//! The vector primitive and the sampling helpers built on it.
//!
//! Points, directions and colors all share one type; the aliases only document
//! intent. Random helpers draw from an injected [`RngCore`] so callers decide
//! whether randomness is seeded, per-thread or shared.

use rand::{Rng, RngCore};

/// 3-component double precision vector.
pub type Vec3 = glam::DVec3;

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB radiance or reflectance.
pub type Color = Vec3;

/// Components below this magnitude count as zero for [`near_zero`].
const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Squared lengths at or below this are rejected by [`random_unit_vector`]
/// so the following division cannot underflow.
const MIN_SAMPLE_LENGTH_SQUARED: f64 = 1e-160;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Uniform draw in `[0, 1)`.
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Uniform draw in `[min, max)`.
#[inline]
pub fn gen_range_f64(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Scale `v` to unit length. `v` must be nonzero.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// True if every component is within `1e-8` of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.x.abs() < NEAR_ZERO_EPSILON && v.y.abs() < NEAR_ZERO_EPSILON && v.z.abs() < NEAR_ZERO_EPSILON
}

/// Vector with each component uniform in `[0, 1)`.
pub fn random_vec(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with each component uniform in `[min, max)`.
pub fn random_vec_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
        gen_range_f64(rng, min, max),
    )
}

/// Uniformly distributed direction on the unit sphere.
///
/// Rejection sampling: points in the cube are kept only when they fall inside
/// the unit ball, then projected onto its surface.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec_range(rng, -1.0, 1.0);
        let len_sq = p.length_squared();
        if MIN_SAMPLE_LENGTH_SQUARED < len_sq && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Unit direction in the hemisphere around `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}

/// Uniform point inside the unit disk in the z = 0 plane.
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

/// Mirror `v` about the surface with normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Bend the unit direction `uv` through a surface with normal `n` by Snell's law.
///
/// `etai_over_etat` is the ratio of refractive indices across the boundary.
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    // Rounding can push the perpendicular part just past unit length.
    let perp_len_sq = r_out_perp.length_squared().min(1.0);
    let r_out_parallel = -(1.0 - perp_len_sq).max(0.0).sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_unit_vector_has_unit_length() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(1e6, -2e6, 3e6),
            Vec3::new(0.0, 0.0, -7.0),
        ];
        for v in vectors {
            assert!((unit_vector(v).length() - 1.0).abs() < 1e-12, "v = {v}");
        }
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(1e-9, 2e-8, 0.0)));
        assert!(!near_zero(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_reflect_is_self_inverse() {
        let n = unit_vector(Vec3::new(1.0, 2.0, -0.5));
        let v = Vec3::new(0.3, -1.2, 4.0);

        assert!(approx_eq(reflect(reflect(v, n), n), v));
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_with_unit_ratio_is_identity() {
        let n = Vec3::Y;
        let uv = unit_vector(Vec3::new(1.0, -2.0, 0.5));

        assert!(approx_eq(refract(uv, n, 1.0), uv));
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser_medium() {
        let n = Vec3::Y;
        let uv = unit_vector(Vec3::new(1.0, -1.0, 0.0));
        let refracted = refract(uv, n, 1.0 / 1.5);

        // Smaller tangential component, still heading into the surface.
        assert!(refracted.x < uv.x);
        assert!(refracted.y < 0.0);
        assert!((refracted.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_refract_clamps_overshooting_perpendicular() {
        // Grazing ray with a ratio that pushes |r_perp| past one.
        let n = Vec3::Y;
        let uv = unit_vector(Vec3::new(1.0, -1e-3, 0.0));
        let refracted = refract(uv, n, 1.5);

        assert!(refracted.is_finite());
        assert!(refracted.y.abs() < 1e-12);
    }

    #[test]
    fn test_random_unit_vector_is_unit_and_unbiased() {
        let mut rng = StdRng::seed_from_u64(42);
        let count = 20_000;
        let mut sum = Vec3::ZERO;

        for _ in 0..count {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
            sum += v;
        }

        // Mean of a uniform distribution on the sphere is the origin.
        let mean = sum / count as f64;
        assert!(mean.length() < 0.03, "mean = {mean}");
    }

    #[test]
    fn test_random_on_hemisphere_faces_normal() {
        let mut rng = StdRng::seed_from_u64(42);
        let normal = unit_vector(Vec3::new(0.2, 1.0, -0.3));

        for _ in 0..1_000 {
            assert!(random_on_hemisphere(&mut rng, normal).dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_random_in_unit_disk_stays_in_disk() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let p = random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_vec_range_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let v = random_vec_range(&mut rng, -2.0, 3.0);
            for c in v.to_array() {
                assert!((-2.0..3.0).contains(&c));
            }
            let u = random_vec(&mut rng);
            for c in u.to_array() {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }
}
