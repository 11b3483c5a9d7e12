//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection by solving the quadratic
//! |r(t) - center|^2 = radius^2 with the standard discriminant formula.

use glam::Vec3A;

use crate::material::Material;
use crate::ray::Ray;
use crate::shape::Shape;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere.
    ///
    /// Expected to be positive; a zero or negative radius is invalid scene
    /// configuration and is not validated here.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Quadratic coefficients for |origin + t*dir - center|^2 = r^2
        let cp = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * cp.dot(ray.direction);
        let c = cp.dot(cp) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();

        // Keep only hits on the forward half of the ray, nearest first.
        let near = (-b - sqrt) / (2.0 * a);
        if near >= 0.0 {
            return Some(near);
        }
        let far = (-b + sqrt) / (2.0 * a);
        if far >= 0.0 {
            return Some(far);
        }
        None
    }

    fn normal_at(&self, point: Vec3A) -> Vec3A {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn plain_sphere(center: Vec3A, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::diffuse(Vec3A::ZERO, Vec3A::ONE))
    }

    #[test]
    fn ray_aimed_at_center_hits_the_near_surface() {
        let sphere = plain_sphere(Vec3A::ZERO, 1.0);
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 5.0), Vec3A::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).expect("ray through center must hit");
        // Two roots exist (t = 4 and t = 6); the nearer one is reported.
        assert!((t - 4.0).abs() < EPS);
        // The hit point lies on the surface.
        let hit = ray.at(t);
        assert!(((hit - sphere.center).length() - sphere.radius).abs() < EPS);
    }

    #[test]
    fn ray_from_inside_reports_the_exit_point() {
        let sphere = plain_sphere(Vec3A::ZERO, 2.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));

        let t = sphere.intersect(&ray).expect("ray from inside must exit");
        assert!(t >= 0.0);
        assert!((t - 2.0).abs() < EPS);
    }

    #[test]
    fn ray_that_misses_returns_none() {
        let sphere = plain_sphere(Vec3A::ZERO, 1.0);
        let ray = Ray::new(Vec3A::new(0.0, 3.0, 5.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_behind_the_origin_is_rejected() {
        let sphere = plain_sphere(Vec3A::new(0.0, 0.0, 5.0), 1.0);
        // Pointing directly away from the sphere.
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn normal_points_outward_and_is_unit_length() {
        let sphere = plain_sphere(Vec3A::new(1.0, 0.0, 0.0), 3.0);
        let normal = sphere.normal_at(Vec3A::new(4.0, 0.0, 0.0));
        assert!((normal - Vec3A::new(1.0, 0.0, 0.0)).length() < EPS);
        assert!((normal.length() - 1.0).abs() < EPS);
    }
}
