//! Ray representation for 3D ray tracing.
//!
//! A ray is the parametric line r(t) = origin + t * direction; intersection
//! tests only consider the forward half (t >= 0).

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point for shadow
    /// and reflection rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. Shadow rays use an unnormalized
    /// direction so that t = 1 lands exactly on the light.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_the_direction() {
        let ray = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(0.0), Vec3A::new(1.0, 2.0, 3.0));
        assert_eq!(ray.at(0.5), Vec3A::new(1.0, 2.0, 2.0));
        assert_eq!(ray.at(2.0), Vec3A::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn at_does_not_assume_unit_direction() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(3.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3A::new(3.0, 0.0, 0.0));
    }

    // Sanity checks of the vector conventions the tracer math relies on.
    #[test]
    fn vector_algebra_conventions_hold() {
        let a = Vec3A::new(1.5, -2.0, 0.25);
        let b = Vec3A::new(-0.5, 4.0, 3.0);

        assert!((a + (b - a) - b).length() < 1e-6);
        assert!((a.normalize().length() - 1.0).abs() < 1e-6);
        assert!((a.dot(a) - a.length_squared()).abs() < 1e-6);
    }
}
