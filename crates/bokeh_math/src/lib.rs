//! Math primitives for the bokeh path tracer.
//!
//! Everything is double precision: the random-direction sampler relies on
//! squared lengths down to `1e-160`, far below what `f32` can represent.

// Re-export glam for convenience
pub use glam;

mod interval;
mod ray;
pub mod vec3;

pub use interval::Interval;
pub use ray::Ray;
pub use vec3::{Color, Point3, Vec3};
