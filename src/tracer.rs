//! Ray tracer: per-pixel sampling, camera ray generation, and recursive
//! reflection.
//!
//! The tracer walks every pixel of the output raster, shoots a small grid of
//! sub-pixel rays through the scene's image plane, and averages the traced
//! values. Tracing follows the nearest intersection, shades it, and recurses
//! along the mirror reflection until the bounce limit.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::{reflect, shade_at};

/// Default sub-pixel sample count per axis (2x2 grid, 4 rays per pixel).
pub const DEFAULT_SAMPLES_PER_AXIS: u32 = 2;

/// Default reflection bounce limit.
pub const DEFAULT_MAX_BOUNCES: u32 = 3;

/// Offset along the surface normal applied to reflected-ray origins so the
/// new ray cannot immediately re-hit the surface it started on.
const SELF_INTERSECTION_BIAS: f32 = 0.01;

/// Whitted-style ray tracer over an immutable scene.
///
/// Holds only configuration and a shared reference to the scene; tracing
/// itself is stateless, so rows can be rendered from parallel threads.
pub struct RayTracer<'a> {
    scene: &'a Scene,
    width: u32,
    height: u32,
    /// Sub-pixel samples per axis. 1 collapses supersampling to a single
    /// ray per pixel.
    pub samples_per_axis: u32,
    /// Number of mirror-reflection bounces allowed per primary ray. 0
    /// disables reflection entirely.
    pub max_bounces: u32,
}

impl<'a> RayTracer<'a> {
    /// Create a tracer for a scene and output raster size, with default
    /// sampling and bounce settings.
    pub fn new(scene: &'a Scene, width: u32, height: u32) -> Self {
        Self {
            scene,
            width,
            height,
            samples_per_axis: DEFAULT_SAMPLES_PER_AXIS,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }

    /// Render the whole raster into a linear-light f32 image buffer.
    ///
    /// Pixels are distributed across CPU cores; the scene is read-only
    /// shared state, so no pixel depends on any other.
    pub fn render(&self) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::new(self.width, self.height);

        info!("Tracing {}x{} pixels on {} CPU cores...", self.width, self.height, rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.width * self.height) as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            let color = self.traced_value_at_pixel(x, y);
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Trace one pixel: average an n x n grid of sub-pixel rays.
    pub fn traced_value_at_pixel(&self, x: u32, y: u32) -> Color {
        let n = self.samples_per_axis;
        let sample_weight = 1.0 / (n * n) as f32;
        let mut color = Vec3A::ZERO;

        for dx in 0..n {
            for dy in 0..n {
                let ray = self.ray_for(
                    x as f32 + dx as f32 / n as f32,
                    y as f32 + dy as f32 / n as f32,
                );
                color += sample_weight * self.traced_value_for_ray(&ray, 0);
            }
        }

        color
    }

    /// Map (possibly fractional) pixel coordinates to a world-space camera
    /// ray.
    ///
    /// The pixel is normalized to [0, 1) on each axis (the y axis flipped so
    /// row 0 is the top of the image), the image-plane corners are
    /// bilinearly interpolated to a world point, and the ray leaves the eye
    /// through that point.
    pub fn ray_for(&self, x: f32, y: f32) -> Ray {
        let xt = x / self.width as f32;
        let yt = (self.height as f32 - y - 1.0) / self.height as f32;

        let plane = &self.scene.image_plane;
        let top = plane.top_left.lerp(plane.top_right, xt);
        let bottom = plane.bottom_left.lerp(plane.bottom_right, xt);
        let point = top.lerp(bottom, yt);

        Ray::new(self.scene.camera, point - self.scene.camera)
    }

    /// Trace a single ray through the scene.
    ///
    /// Shades the nearest intersection and, below the bounce limit, adds the
    /// recursively traced mirror reflection scaled by the material's
    /// reflectance. A miss is pure black. The reflected sum is left
    /// unclamped here; only the final 8-bit conversion bounds it.
    pub fn traced_value_for_ray(&self, ray: &Ray, depth: u32) -> Color {
        let Some(intersection) = self.scene.nearest_intersection(ray) else {
            return Vec3A::ZERO;
        };

        let mut color = shade_at(&intersection, self.scene);

        if depth < self.max_bounces {
            let reflected_direction = reflect(ray.direction.normalize(), intersection.normal);
            let reflected_ray = Ray::new(
                intersection.point + SELF_INTERSECTION_BIAS * intersection.normal,
                reflected_direction,
            );

            let reflected = self.traced_value_for_ray(&reflected_ray, depth + 1);
            color += reflected * intersection.shape.material().kr;
        }

        color
    }
}
