//! Camera for ray generation.
//!
//! Configuration lives in plain fields and `with_*` builders. The derived view
//! geometry is recomputed by [`Camera::initialize`] at the start of every render
//! and stays fixed while rows are traced.

use bokeh_math::vec3::{gen_f64, random_in_unit_disk, unit_vector};
use bokeh_math::{Point3, Ray, Vec3};
use log::debug;
use rand::RngCore;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixels; the height follows from the aspect ratio
    pub image_width: u32,
    /// Number of random samples per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    pub max_depth: u32,
    /// Seed for reproducible renders; `None` draws fresh entropy per row
    pub seed: Option<u64>,

    // Camera positioning
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,

    // Lens settings
    vfov: f64,          // Vertical field of view in degrees
    defocus_angle: f64, // Variation angle of rays through each pixel
    focus_dist: f64,    // Distance from camera to plane of perfect focus

    // Cached computed values (set by initialize())
    image_height: u32,
    viewport_width: f64,
    viewport_height: f64,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    samples_scale: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 400,
            samples_per_pixel: 10,
            max_depth: 10,
            seed: None,
            look_from: Point3::new(0.0, 0.0, 0.0),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            // Cached values (initialized to defaults)
            image_height: 1,
            viewport_width: 0.0,
            viewport_height: 0.0,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            samples_scale: 0.1,
        }
    }

    /// Set image width and aspect ratio.
    pub fn with_image(mut self, image_width: u32, aspect_ratio: f64) -> Self {
        self.image_width = image_width;
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

    /// Set lens settings. Angles are in degrees.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Make renders reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Derive the view geometry from the current settings.
    ///
    /// Called by the render entry points; call it directly only when
    /// generating rays by hand.
    pub fn initialize(&mut self) {
        // A zero width would leave no pixels and divide the viewport by zero.
        self.image_width = self.image_width.max(1);
        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);

        self.samples_per_pixel = self.samples_per_pixel.max(1);
        self.samples_scale = 1.0 / self.samples_per_pixel as f64;
        self.center = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        self.viewport_height = 2.0 * h * self.focus_dist;
        self.viewport_width =
            self.viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Calculate camera basis vectors
        self.w = unit_vector(self.look_from - self.look_at);
        self.u = unit_vector(self.vup.cross(self.w));
        self.v = self.w.cross(self.u);

        // Viewport edges; v runs downward so image rows increase toward -v
        let viewport_u = self.viewport_width * self.u;
        let viewport_v = self.viewport_height * -self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        debug!(
            "Camera initialized: {}x{}, viewport {:.4}x{:.4}, defocus radius {:.4}",
            self.image_width, self.image_height, self.viewport_width, self.viewport_height, defocus_radius
        );
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target point is jittered inside the pixel footprint (box filter);
    /// with a positive defocus angle the origin is sampled on the lens disk.
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

    /// Image height derived by the last [`Camera::initialize`].
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Viewport (width, height) in world units on the focus plane.
    pub fn viewport_size(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f64 {
        self.samples_scale
    }

    pub fn center(&self) -> Point3 {
        self.center
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a random point in the square [-0.5, 0.5) x [-0.5, 0.5).
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng) - 0.5, gen_f64(rng) - 0.5, 0.0)
}
