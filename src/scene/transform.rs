//! Local transform of a scene node.

use glam::{Mat4, Quat, Vec3};

/// Position, orientation and scale of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
    }

    /// Rotate by `angle_deg` around `axis` passing through `pivot`.
    ///
    /// Both the orientation and the position change: the node orbits the
    /// pivot. A zero-length axis leaves the transform untouched.
    pub fn rotate_by_axis_with_pivot(&mut self, angle_deg: f32, axis: Vec3, pivot: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let delta = Quat::from_axis_angle(axis, angle_deg.to_radians());
        self.position = pivot + delta * (self.position - pivot);
        self.rotation = (delta * self.rotation).normalize();
    }

    /// Local-to-parent matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
