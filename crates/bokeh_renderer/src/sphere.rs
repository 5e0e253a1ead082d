//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use bokeh_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radii are clamped to zero, which yields a sphere that is never hit.
    pub fn new(center: Point3, radius: f64, material: Arc<Material>) -> Self {
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

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        // A zero radius has no surface and no defined normal
        if self.radius <= 0.0 {
            return false;
        }

        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        rec.material = self.material.as_ref();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lambertian;
    use bokeh_math::{Color, Vec3};

    fn grey() -> Arc<Material> {
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into())
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.material, sphere.material().as_ref());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
    }

    #[test]
    fn test_axis_ray_roots() {
        // Ray from distance d toward a sphere of radius r meets it at d - r and d + r.
        let (d, r) = (5.0, 1.5);
        let center = Point3::new(0.0, 0.0, -d);
        let sphere = Sphere::new(center, r, grey());
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.01, f64::INFINITY), &mut rec));
        assert!((rec.t - (d - r)).abs() < 1e-12);
        assert!(rec.front_face);

        // Excluding the near root falls back to the far one, seen from inside.
        assert!(sphere.hit(&ray, Interval::new(d - r + 0.1, f64::INFINITY), &mut rec));
        assert!((rec.t - (d + r)).abs() < 1e-12);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        // Both roots excluded.
        assert!(!sphere.hit(&ray, Interval::new(0.01, d - r), &mut rec));
    }

    #[test]
    fn test_ray_from_inside_hits_far_side() {
        let sphere = Sphere::new(Point3::ZERO, 2.0, grey());
        let ray = Ray::new(Point3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, Interval::new(0.01, f64::INFINITY), &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_negative_radius_is_clamped_and_never_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), -3.0, grey());
        assert_eq!(sphere.radius(), 0.0);

        let off_center = Ray::new(Point3::ZERO, Vec3::new(0.0, 1e-3, -1.0));
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&off_center, Interval::new(0.01, f64::INFINITY), &mut rec));

        // Aimed straight through the center the discriminant is exactly zero.
        let through_center = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&through_center, Interval::new(0.01, f64::INFINITY), &mut rec));
        assert_eq!(rec.t, 0.0);
        assert_eq!(rec.normal, Vec3::ZERO);
    }

    #[test]
    fn test_zero_radius_is_never_hit() {
        let sphere = Sphere::new(Point3::new(2.0, 0.0, 0.0), 0.0, grey());
        let ray = Ray::new(Point3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, Interval::UNIVERSE, &mut rec));
    }
}
