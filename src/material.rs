//! Phong material description.
//!
//! Materials are plain per-channel coefficient sets consumed by the shading
//! model; they carry no behavior of their own and never change during a
//! render.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Components are red/green/blue intensities in [0, 1] during shading;
/// conversion to 8-bit channels happens only at the output sink.
pub type Color = Vec3A;

/// Per-channel Phong coefficients attached to a shape.
///
/// Each coefficient scales one lighting contribution componentwise, so a
/// material can respond differently per color channel.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Ambient coefficient, multiplied with the scene's ambient intensity.
    pub ka: Vec3A,
    /// Diffuse coefficient, multiplied with each light's diffuse intensity.
    pub kd: Vec3A,
    /// Specular coefficient, multiplied with each light's specular intensity.
    pub ks: Vec3A,
    /// Shininess exponent for the specular highlight.
    ///
    /// Stored as an integer and applied with `powi`, which keeps the
    /// sign-by-parity result when the reflected-view dot product goes
    /// negative (the shading model does not clamp it first).
    pub alpha: i32,
    /// Reflectance coefficient scaling the recursively traced reflection.
    pub kr: Vec3A,
}

impl Material {
    /// Create a material from its five Phong coefficients.
    pub fn new(ka: Vec3A, kd: Vec3A, ks: Vec3A, alpha: i32, kr: Vec3A) -> Self {
        Self { ka, kd, ks, alpha, kr }
    }

    /// Matte material with no specular highlight and no reflection.
    pub fn diffuse(ka: Vec3A, kd: Vec3A) -> Self {
        Self {
            ka,
            kd,
            ks: Vec3A::ZERO,
            alpha: 1,
            kr: Vec3A::ZERO,
        }
    }
}
