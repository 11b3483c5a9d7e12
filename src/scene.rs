//! Scene description: camera, image plane, lights, and object list.
//!
//! A Scene is built once before rendering and then shared read-only by every
//! traced ray, so parallel rows need no synchronization.

use glam::Vec3A;

use crate::ray::Ray;
use crate::shape::{Intersection, Shape};

/// Rectangle in world space that camera rays pass through.
///
/// The four corners are bilinearly interpolated to map normalized pixel
/// coordinates onto world points.
#[derive(Debug, Clone, Copy)]
pub struct ImagePlane {
    /// World-space corner corresponding to the image's top-left.
    pub top_left: Vec3A,
    /// World-space corner corresponding to the image's top-right.
    pub top_right: Vec3A,
    /// World-space corner corresponding to the image's bottom-left.
    pub bottom_left: Vec3A,
    /// World-space corner corresponding to the image's bottom-right.
    pub bottom_right: Vec3A,
}

/// Point light with separate diffuse and specular intensities.
///
/// No distance attenuation and no area; shadows from it are hard.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Light position in world coordinates.
    pub position: Vec3A,
    /// Per-channel diffuse intensity.
    pub id: Vec3A,
    /// Per-channel specular intensity.
    pub is: Vec3A,
}

/// Complete description of what gets rendered.
///
/// Objects are stored as trait objects and scanned linearly on every
/// intersection query; the scene is immutable for the duration of a render.
pub struct Scene {
    /// Camera (eye) position.
    pub camera: Vec3A,
    /// Image plane the camera rays are shot through.
    pub image_plane: ImagePlane,
    /// Per-channel ambient light intensity.
    pub ia: Vec3A,
    /// Every object in the scene, in insertion order.
    pub objects: Vec<Box<dyn Shape>>,
    /// Every light in the scene.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene with no objects and no lights.
    ///
    /// An empty scene is valid: every ray misses and every pixel renders
    /// black.
    pub fn new(camera: Vec3A, image_plane: ImagePlane, ia: Vec3A) -> Self {
        Self {
            camera,
            image_plane,
            ia,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn Shape>) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Find the nearest intersection of a ray with any scene object.
    ///
    /// Brute-force linear scan over all objects; among those hit, the one
    /// with the minimum ray parameter wins.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.objects
            .iter()
            .filter_map(|object| Intersection::of(object.as_ref(), ray))
            .min_by(|a, b| a.t.total_cmp(&b.t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;

    fn test_plane() -> ImagePlane {
        ImagePlane {
            top_left: Vec3A::new(-1.0, 1.0, -0.5),
            top_right: Vec3A::new(1.0, 1.0, -0.5),
            bottom_left: Vec3A::new(-1.0, -1.0, -0.5),
            bottom_right: Vec3A::new(1.0, -1.0, -0.5),
        }
    }

    #[test]
    fn empty_scene_has_no_intersections() {
        let scene = Scene::new(Vec3A::ZERO, test_plane(), Vec3A::splat(0.1));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_intersection(&ray).is_none());
    }

    #[test]
    fn nearest_of_two_spheres_wins() {
        let mut scene = Scene::new(Vec3A::ZERO, test_plane(), Vec3A::splat(0.1));
        let material = Material::diffuse(Vec3A::ZERO, Vec3A::ONE);
        scene.add_object(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 1.0, material)));
        scene.add_object(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, material)));

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_intersection(&ray).expect("both spheres are in front");
        assert!((hit.t - 4.0).abs() < 1e-4);
        assert!((hit.point.z - -4.0).abs() < 1e-4);
    }
}
