//! Phong shading model with hard shadows.
//!
//! Computes the observed color at an intersection from the scene's lights:
//! per-light diffuse and specular terms gated by a light-facing check and a
//! binary shadow test, plus a single unconditional ambient term.

use glam::Vec3A;

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::{Light, Scene};
use crate::shape::{Intersection, Shape};

/// Mirror a vector about a surface normal.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Compute the directly observed color at an intersection.
///
/// For each light: lights facing away from the surface (n.l < 0) are skipped
/// outright, shadowed lights contribute nothing, and unoccluded lights add a
/// diffuse term kd*id*(n.l) and a specular term ks*is*(r.v)^alpha. The
/// reflected-view dot product r.v is not clamped to zero before
/// exponentiation. The ambient term ka*ia is added once after the light
/// loop, and the result is clamped to [0, 1] per channel.
pub fn shade_at(intersection: &Intersection<'_>, scene: &Scene) -> Color {
    let mut color = Vec3A::ZERO;
    let material = intersection.shape.material();

    // Unit vector from the hit point back to the eye.
    let v = (scene.camera - intersection.point).normalize();

    for light in &scene.lights {
        let l = (light.position - intersection.point).normalize();
        let light_in_normal_direction = l.dot(intersection.normal);

        // Light is behind the surface; not a shadow, so no shadow ray either.
        if light_in_normal_direction < 0.0 {
            continue;
        }

        if in_shadow(intersection.point, intersection.shape, light, scene) {
            continue;
        }

        let diffuse = material.kd * light.id * light_in_normal_direction;
        color += diffuse;

        // Mirror of the light direction about the normal.
        let r = 2.0 * light_in_normal_direction * intersection.normal - l;
        let amount_reflected_at_viewer = r.dot(v);
        let specular = material.ks * light.is * amount_reflected_at_viewer.powi(material.alpha);
        color += specular;
    }

    color += material.ka * scene.ia;
    color.clamp(Vec3A::ZERO, Vec3A::ONE)
}

/// Test whether a surface point is occluded from a light.
///
/// The shadow ray keeps its direction unnormalized so the light sits exactly
/// at t = 1; any other object hit with 0 < t <= 1 therefore lies between the
/// point and the light. Existence is all that matters, so the scan
/// short-circuits on the first occluder.
fn in_shadow(point: Vec3A, owner: &dyn Shape, light: &Light, scene: &Scene) -> bool {
    let shadow_ray = Ray::new(point, light.position - point);

    scene
        .objects
        .iter()
        .filter(|object| !std::ptr::addr_eq(object.as_ref() as *const dyn Shape, owner as *const dyn Shape))
        .any(|object| matches!(object.intersect(&shadow_ray), Some(t) if t > 0.0 && t <= 1.0))
}
