//! Simple path tracer example.
//!
//! Builds a small scene in code, renders it on all cores and saves a PPM.

use pyrite_core::{CameraSettings, RenderSettings};
use pyrite_renderer::{render_parallel, save_ppm, Camera, Color, Material, Scene, Sphere, Vec3};

fn main() {
    println!("Pyrite Path Tracer - Simple Example");
    println!("===================================");

    // Build the scene
    let start = std::time::Instant::now();
    let world = build_scene();
    println!("Scene built in {:?} ({} spheres)", start.elapsed(), world.len());

    // Set up camera
    let camera = Camera::from_settings(&CameraSettings {
        look_from: Vec3::new(0.0, 0.5, 1.0),
        look_at: Vec3::new(0.0, 0.0, -1.0),
        width: 400,
        height: 225,
        vfov: 70.0,
        ..Default::default()
    });

    // Render configuration
    let settings = RenderSettings {
        samples_per_pixel: 50,
        max_depth: 10,
        ..Default::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, settings.samples_per_pixel
    );

    // Render
    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &world, &settings);
    println!("Rendered in {:?}", start.elapsed());

    // Save as PPM
    let filename = "simple_render.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    Scene::new()
        // Ground
        .with(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Material::Diffuse {
                albedo: Color::new(0.8, 0.8, 0.0),
            },
        ))
        .with(Sphere::new(
            Vec3::new(0.0, 0.0, -1.2),
            0.5,
            Material::Diffuse {
                albedo: Color::new(0.1, 0.2, 0.5),
            },
        ))
        // Hollow glass: outer shell plus an inward-facing inner wall
        .with(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, Material::Dielectric { ior: 1.5 }))
        .with(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.4, Material::Dielectric { ior: 1.5 }))
        .with(Sphere::new(
            Vec3::new(1.0, 0.0, -1.0),
            0.5,
            Material::Metal {
                albedo: Color::new(0.8, 0.6, 0.2),
                fuzz: 0.3,
            },
        ))
        .with(Sphere::new(
            Vec3::new(0.0, 1.5, -1.5),
            0.3,
            Material::Emissive {
                emission: Color::new(6.0, 5.0, 4.0),
            },
        ))
}
