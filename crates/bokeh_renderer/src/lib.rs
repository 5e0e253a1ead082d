//! bokeh renderer - CPU Monte Carlo path tracing.
//!
//! Scenes are flat lists of spheres with shared materials. The camera traces
//! jittered rays per pixel, one rayon task per image row, and tone-maps the
//! averaged radiance to 8-bit RGB.

mod camera;
mod hittable;
mod material;
pub mod output;
mod renderer;
pub mod settings;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList, Primitive, Scene};
pub use material::{Dielectric, Lambertian, Material, Metal, Scatter, ScatterResult};
pub use output::{OutputError, OutputResult};
pub use renderer::{
    linear_to_gamma, ray_color, render_pixel, tone_map, Framebuffer, SHADOW_ACNE_EPSILON,
};
pub use settings::{RenderSettings, SettingsError};
pub use sphere::Sphere;

/// Re-export math types from bokeh_math
pub use bokeh_math::{Color, Interval, Point3, Ray, Vec3};
