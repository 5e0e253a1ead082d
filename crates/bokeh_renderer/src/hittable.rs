//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Lambertian, Material, Sphere};
use bokeh_math::{Color, Interval, Point3, Ray, Vec3};

/// Material referenced by a default HitRecord before any hit fills it in.
static PLACEHOLDER_MATERIAL: Material = Material::Lambertian(Lambertian::new(Color::ZERO));

/// Record of a ray-object intersection.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl Default for HitRecord<'_> {
    fn default() -> Self {
        Self {
            p: Point3::ZERO,
            normal: Vec3::ZERO,
            material: &PLACEHOLDER_MATERIAL,
            t: 0.0,
            front_face: false,
        }
    }
}

impl HitRecord<'_> {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    /// `outward_normal` must have unit length.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns true if hit, and fills in the hit record with the closest
    /// intersection inside `ray_t`. On a miss the record is left unspecified.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}

/// The closed set of intersectable primitives a scene can hold.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Hittable for Primitive {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t, rec),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

/// A list of hittable objects, scanned linearly.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Primitive>,
}

/// A renderable scene.
pub type Scene = HittableList;

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Primitive>) {
        self.objects.push(object.into());
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

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }
}

impl FromIterator<Primitive> for HittableList {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Primitives only write the record on acceptance, so it always holds
        // the nearest hit seen so far.
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
