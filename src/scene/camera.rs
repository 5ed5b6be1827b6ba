//! Stereo camera rig.

use glam::{Quat, Vec3};

use super::graph::RenderMask;
use super::post_effect::PostEffect;
use super::transform::Transform;

/// Convert a `[0, 1]` channel to a byte.
pub fn gl_to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a byte channel to `[0, 1]`.
pub fn byte_to_gl(b: u8) -> f32 {
    b as f32 / 255.0
}

/// One eye's camera: clear colour, render mask and post-effect chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// RGBA, each channel in `[0, 1]`
    background: [f32; 4],
    render_mask: RenderMask,
    post_effects: Vec<PostEffect>,
}

impl Camera {
    pub fn new(render_mask: RenderMask) -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            render_mask,
            post_effects: Vec::new(),
        }
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.background
    }

    /// Set the clear colour. Channels are clamped to `[0, 1]`.
    pub fn set_background_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.background = [r, g, b, a].map(|c| c.clamp(0.0, 1.0));
    }

    /// Clear colour packed as `0xAARRGGBB`.
    pub fn background_argb(&self) -> u32 {
        let [r, g, b, a] = self.background.map(gl_to_byte);
        u32::from_be_bytes([a, r, g, b])
    }

    pub fn set_background_argb(&mut self, argb: u32) {
        let [a, r, g, b] = argb.to_be_bytes();
        self.background = [byte_to_gl(r), byte_to_gl(g), byte_to_gl(b), byte_to_gl(a)];
    }

    pub fn render_mask(&self) -> RenderMask {
        self.render_mask
    }

    pub fn set_render_mask(&mut self, mask: RenderMask) {
        self.render_mask = mask;
    }

    /// Append an effect to the end of the chain.
    pub fn add_post_effect(&mut self, effect: PostEffect) {
        self.post_effects.push(effect);
    }

    /// Remove every instance of `effect` from the chain.
    pub fn remove_post_effect(&mut self, effect: &PostEffect) {
        self.post_effects.retain(|e| e != effect);
    }

    pub fn post_effects(&self) -> &[PostEffect] {
        &self.post_effects
    }
}

/// Left/right cameras sharing one owner transform and head orientation.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub left: Camera,
    pub right: Camera,
    /// Placement of the rig in the scene
    pub owner: Transform,
    /// Head orientation reported by tracking
    head: Quat,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            left: Camera::new(RenderMask::LEFT),
            right: Camera::new(RenderMask::RIGHT),
            owner: Transform::IDENTITY,
            head: Quat::IDENTITY,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head_orientation(&self) -> Quat {
        self.head
    }

    pub fn set_head_orientation(&mut self, orientation: Quat) {
        self.head = orientation.normalize();
    }

    /// Unit look direction in world space. Forward is `-Z`.
    pub fn look_at(&self) -> Vec3 {
        (self.owner.rotation * self.head * Vec3::NEG_Z).normalize()
    }

    /// Apply the same clear colour to both eyes.
    pub fn set_background_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.left.set_background_color(r, g, b, a);
        self.right.set_background_color(r, g, b, a);
    }

    /// Append the same effect to both eyes.
    pub fn add_post_effect(&mut self, effect: PostEffect) {
        self.left.add_post_effect(effect.clone());
        self.right.add_post_effect(effect);
    }
}
