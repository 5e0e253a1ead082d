//! The demo scene: three large spheres on a ground sphere, surrounded by a
//! grid of small randomly placed spheres.

use bokeh_renderer::{Color, Dielectric, Lambertian, Material, Metal, Point3, Scene, Sphere};
use rand::Rng;
use std::sync::Arc;

fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Build the final demo scene.
pub fn final_scene(rng: &mut impl Rng) -> Scene {
    let mut world = Scene::new();

    // One glass instance shared by every glass sphere
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());

    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into()),
    ));
    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass.clone()));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)).into()),
    ));

    let keep_clear = Point3::new(4.0, 0.2, 0.0);
    for b in (-10..=11).rev() {
        for a in (-10..=11).rev() {
            let choose_mat: f64 = rng.gen();
            let center = Point3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let material: Arc<Material> = if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_color(rng) * random_color(rng);
                Arc::new(Lambertian::new(albedo).into())
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_color(rng) * random_color(rng);
                let fuzz = rng.gen_range(0.0..0.5);
                Arc::new(Metal::new(albedo, fuzz).into())
            } else {
                glass.clone()
            };
            world.add(Sphere::new(center, 0.2, material));
        }
    }

    // Ground
    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into()),
    ));

    world
}
