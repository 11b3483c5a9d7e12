use clap::Parser;
use glam::Vec3A;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use lumiray::material::Material;
use lumiray::scene::{ImagePlane, Light, Scene};
use lumiray::sphere::Sphere;
use lumiray::tracer::RayTracer;
use output::{save_image_as_exr, save_image_as_png, send_image_to_tev};

/// Build the fixed three-sphere scene: two glossy spheres up front and a
/// strongly reflective one in the back, lit by a warm and a cool point light.
fn create_scene() -> Scene {
    let mut scene = Scene::new(
        Vec3A::new(0.0, 0.0, 2.0),
        ImagePlane {
            top_left: Vec3A::new(-1.28, 0.86, -0.5),
            top_right: Vec3A::new(1.28, 0.86, -0.5),
            bottom_left: Vec3A::new(-1.28, -0.86, -0.5),
            bottom_right: Vec3A::new(1.28, -0.86, -0.5),
        },
        Vec3A::splat(0.5),
    );

    scene.add_object(Box::new(Sphere::new(
        Vec3A::new(-1.1, 0.6, -1.0),
        0.2,
        Material::new(
            Vec3A::splat(0.1),
            Vec3A::new(0.5, 0.5, 0.9),
            Vec3A::splat(0.7),
            20,
            Vec3A::new(0.1, 0.1, 0.2),
        ),
    )));

    scene.add_object(Box::new(Sphere::new(
        Vec3A::new(0.2, -0.1, -1.0),
        0.5,
        Material::new(
            Vec3A::splat(0.1),
            Vec3A::new(0.9, 0.5, 0.5),
            Vec3A::splat(0.7),
            20,
            Vec3A::new(0.2, 0.1, 0.1),
        ),
    )));

    scene.add_object(Box::new(Sphere::new(
        Vec3A::new(1.2, -0.5, -1.75),
        0.4,
        Material::new(
            Vec3A::splat(0.1),
            Vec3A::new(0.1, 0.5, 0.1),
            Vec3A::splat(0.7),
            20,
            Vec3A::new(0.8, 0.9, 0.8),
        ),
    )));

    scene.add_light(Light {
        position: Vec3A::new(-3.0, -0.5, 1.0),
        id: Vec3A::new(0.8, 0.3, 0.3),
        is: Vec3A::splat(0.8),
    });

    scene.add_light(Light {
        position: Vec3A::new(3.0, 2.0, 1.0),
        id: Vec3A::new(0.4, 0.4, 0.9),
        is: Vec3A::splat(0.8),
    });

    scene
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Lumiray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per axis: {}, max bounces: {}",
        args.width, args.height, args.samples_per_axis, args.max_bounces
    );

    let scene = create_scene();

    let mut tracer = RayTracer::new(&scene, args.width, args.height);
    tracer.samples_per_axis = args.samples_per_axis;
    tracer.max_bounces = args.max_bounces;

    let image = tracer.render();

    // Send image to TEV if requested
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&image, tev_address, args.width, args.height);
    }

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output, args.width, args.height);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output, args.width, args.height);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output).extension().unwrap_or_default().to_string_lossy()
        );
        std::process::exit(1);
    }
}
