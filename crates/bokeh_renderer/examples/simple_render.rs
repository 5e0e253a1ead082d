//! Three spheres on a ground plane, rendered to `simple_render.png`.

use bokeh_renderer::{Camera, Color, Dielectric, Lambertian, Material, Metal, Point3, Scene, Sphere, Vec3};
use std::sync::Arc;

fn main() {
    println!("bokeh - simple example");

    let world = build_scene();

    let mut camera = Camera::new()
        .with_image(400, 16.0 / 9.0)
        .with_quality(32, 10)
        .with_position(Point3::new(0.0, 1.0, 6.0), Point3::new(0.0, 0.5, 0.0), Vec3::Y)
        .with_lens(30.0, 0.0, 6.0)
        .with_seed(1);

    let start = std::time::Instant::now();
    let filename = "simple_render.png";
    match camera.render_to_file(&world, filename) {
        Ok(()) => println!("Saved {} in {:?}", filename, start.elapsed()),
        Err(e) => eprintln!("Failed to save {}: {}", filename, e),
    }
}

fn build_scene() -> Scene {
    let material = |m: Material| Arc::new(m);
    let mut world = Scene::new();

    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        material(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into()),
    ));
    world.add(Sphere::new(
        Point3::new(-1.2, 0.5, 0.0),
        0.5,
        material(Lambertian::new(Color::new(0.1, 0.2, 0.5)).into()),
    ));
    world.add(Sphere::new(
        Point3::new(0.0, 0.5, 0.0),
        0.5,
        material(Dielectric::new(1.5).into()),
    ));
    world.add(Sphere::new(
        Point3::new(1.2, 0.5, 0.0),
        0.5,
        material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1).into()),
    ));

    world
}
