//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounded bounce loop with a hard depth cutoff
//! - Anti-aliasing via multi-sampling
//! - One parallel task per image row, each with its own RNG
//! - Gamma-2 tone mapping to 8-bit RGB

use crate::output::{self, OutputResult};
use crate::{Camera, Color, Hittable, HitRecord, Ray, Scatter};
use bokeh_math::vec3::unit_vector;
use bokeh_math::Interval;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// Lower bound on accepted hit distances, so scattered rays do not
/// re-intersect the surface they leave.
pub const SHADOW_ACNE_EPSILON: f64 = 0.01;

/// Displayable intensity range before quantization.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Compute the radiance carried back along a ray.
///
/// Follows at most `depth` scatter events. Each bounce multiplies the running
/// attenuation; a miss returns the sky scaled by it, while absorption or
/// running out of depth returns black.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..depth {
        let mut rec = HitRecord::default();

        if !world.hit(&ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY), &mut rec) {
            return attenuation * sky_gradient(&ray);
        }

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                attenuation *= result.attenuation;
                ray = result.scattered;
            }
            // Ray was absorbed
            None => return Color::ZERO,
        }
    }

    // Exceeded the bounce limit, no more light is gathered
    Color::ZERO
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
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
pub fn tone_map(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, camera.max_depth, world, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Linear radiance image, row-major.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
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

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Tone-map every pixel to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&color| tone_map(color)).collect()
    }
}

/// RNG for one image row. Seeded renders mix the row index into the seed so
/// rows draw independent streams.
fn row_rng(seed: Option<u64>, row: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::from_entropy(),
    }
}

impl Camera {
    /// Render the scene to a linear radiance framebuffer.
    ///
    /// Rows are traced in parallel; each task owns one row slice of the buffer.
    /// Returns once every row is complete.
    pub fn render(&mut self, world: &dyn Hittable) -> Framebuffer {
        self.initialize();
        let camera = &*self;

        let mut image = Framebuffer::new(camera.image_width, camera.image_height());
        info!(
            "Rendering {}x{} @ {} spp, max depth {} on {} threads",
            image.width,
            image.height,
            camera.samples_per_pixel,
            camera.max_depth,
            rayon::current_num_threads()
        );
        let start = Instant::now();

        image
            .pixels
            .par_chunks_mut(camera.image_width as usize)
            .enumerate()
            .for_each(|(j, row)| {
                let mut rng = row_rng(camera.seed, j);
                for (i, pixel) in row.iter_mut().enumerate() {
                    *pixel = render_pixel(camera, world, i as u32, j as u32, &mut rng);
                }
                trace!("Row {j} done");
            });

        info!("Rendered in {:.2?}", start.elapsed());
        image
    }

    /// Render the scene, tone-map it and write it to `path`.
    ///
    /// The format is chosen from the file extension. Returns after the file
    /// has been written.
    pub fn render_to_file(&mut self, world: &dyn Hittable, path: impl AsRef<Path>) -> OutputResult<()> {
        let image = self.render(world);
        output::save_rgb8(image.width, image.height, image.to_rgb8(), path)
    }
}
