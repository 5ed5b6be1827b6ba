//! Post-effect parameter blocks attached to cameras.
//!
//! Only the parameters live here; the shader that consumes them belongs to
//! the renderer. `apply_color_matrix` evaluates the colour-matrix effect on
//! the CPU so previews and tests can check the numbers.

use std::collections::BTreeMap;

use glam::Vec3;

/// Shader name used by the colour-matrix effect.
pub const COLOR_MATRIX_SHADER: &str = "color_matrix";

/// A single uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Float(f32),
    Vec3(Vec3),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostEffect {
    shader: String,
    uniforms: BTreeMap<String, Uniform>,
}

impl PostEffect {
    pub fn new(shader: impl Into<String>) -> Self {
        Self {
            shader: shader.into(),
            uniforms: BTreeMap::new(),
        }
    }

    /// Sepia tone colour matrix used by the gallery.
    pub fn sepia() -> Self {
        Self::color_matrix(
            [0.393, 0.769, 0.189],
            [0.349, 0.686, 0.168],
            [0.272, 0.534, 0.131],
        )
    }

    /// Colour matrix effect: each output channel is a dot product of the
    /// input colour with one row.
    pub fn color_matrix(ratio_r: [f32; 3], ratio_g: [f32; 3], ratio_b: [f32; 3]) -> Self {
        let mut effect = Self::new(COLOR_MATRIX_SHADER);
        effect.set_vec3("ratio_r", Vec3::from(ratio_r));
        effect.set_vec3("ratio_g", Vec3::from(ratio_g));
        effect.set_vec3("ratio_b", Vec3::from(ratio_b));
        effect
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.uniforms.insert(key.into(), Uniform::Float(value));
    }

    pub fn set_vec3(&mut self, key: impl Into<String>, value: Vec3) {
        self.uniforms.insert(key.into(), Uniform::Vec3(value));
    }

    pub fn float(&self, key: &str) -> Option<f32> {
        match self.uniforms.get(key) {
            Some(Uniform::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn vec3(&self, key: &str) -> Option<Vec3> {
        match self.uniforms.get(key) {
            Some(Uniform::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn uniforms(&self) -> &BTreeMap<String, Uniform> {
        &self.uniforms
    }

    /// Evaluate a colour-matrix effect for one RGB sample in `[0, 1]`.
    ///
    /// Returns `None` if this effect is not a colour matrix or a row is missing.
    pub fn apply_color_matrix(&self, rgb: [f32; 3]) -> Option<[f32; 3]> {
        if self.shader != COLOR_MATRIX_SHADER {
            return None;
        }
        let input = Vec3::from(rgb);
        let r = self.vec3("ratio_r")?.dot(input).min(1.0);
        let g = self.vec3("ratio_g")?.dot(input).min(1.0);
        let b = self.vec3("ratio_b")?.dot(input).min(1.0);
        Some([r, g, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_uniforms() {
        let sepia = PostEffect::sepia();
        assert_eq!(sepia.shader(), COLOR_MATRIX_SHADER);
        assert_eq!(sepia.vec3("ratio_r"), Some(Vec3::new(0.393, 0.769, 0.189)));
        assert_eq!(sepia.vec3("ratio_b"), Some(Vec3::new(0.272, 0.534, 0.131)));
        assert_eq!(sepia.float("ratio_r"), None);
    }

    #[test]
    fn test_sepia_black_stays_black() {
        let out = PostEffect::sepia().apply_color_matrix([0.0, 0.0, 0.0]).unwrap();
        assert_eq!(out, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sepia_white_clamps() {
        let out = PostEffect::sepia().apply_color_matrix([1.0, 1.0, 1.0]).unwrap();
        // Row sums: 1.351, 1.203, 0.937
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 1.0);
        assert!((out[2] - 0.937).abs() < 1e-5);
    }

    #[test]
    fn test_non_matrix_effect() {
        let mut effect = PostEffect::new("vignette");
        effect.set_float("strength", 0.4);
        assert_eq!(effect.float("strength"), Some(0.4));
        assert!(effect.apply_color_matrix([0.5, 0.5, 0.5]).is_none());
    }
}
