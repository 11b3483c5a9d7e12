//! Ray-object intersection system.
//!
//! Defines the Shape trait for geometric primitives and the Intersection
//! record handed to the shading model.

use glam::Vec3A;

use crate::material::Material;
use crate::ray::Ray;

/// Trait for objects that can be intersected by rays.
///
/// This is the entire surface contract a primitive must implement to
/// participate in tracing. Must be thread-safe (Sync + Send) so the render
/// loop can scan the scene from parallel rows.
pub trait Shape: Sync + Send {
    /// Test for ray intersection.
    ///
    /// Returns the smallest non-negative ray parameter at which the ray hits
    /// this shape, or `None` when the ray misses or every hit lies behind
    /// the origin.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit surface normal at a point on the shape's surface.
    fn normal_at(&self, point: Vec3A) -> Vec3A;

    /// Material of this shape.
    fn material(&self) -> &Material;
}

/// Ray-object intersection information.
///
/// Built per intersection test and discarded after shading; never stored.
pub struct Intersection<'a> {
    /// The shape that was hit.
    pub shape: &'a dyn Shape,
    /// Ray parameter at the intersection point.
    pub t: f32,
    /// World-space intersection point.
    pub point: Vec3A,
    /// Unit surface normal at the intersection point.
    pub normal: Vec3A,
}

impl<'a> Intersection<'a> {
    /// Intersect a ray with a shape and derive the hit point and normal.
    pub fn of(shape: &'a dyn Shape, ray: &Ray) -> Option<Self> {
        let t = shape.intersect(ray)?;
        let point = ray.at(t);
        Some(Self {
            shape,
            t,
            point,
            normal: shape.normal_at(point),
        })
    }
}
