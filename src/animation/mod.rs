//! Animation capability used by the carousel controller
//!
//! Callers start an [`Animation`] and get back an [`AnimationHandle`] they
//! can poll for completion. [`AnimationEngine`] is the in-process driver
//! that interpolates scene transforms frame by frame.

pub mod easing;
pub mod engine;

pub use easing::Easing;
pub use engine::AnimationEngine;

use glam::Vec3;

use crate::scene::NodeId;

/// Opaque ticket for a started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// A time-based change to one scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Rotate by `angle_deg` (relative) around `axis` through `pivot`.
    RotateByAxisWithPivot {
        target: NodeId,
        duration: f32,
        angle_deg: f32,
        axis: Vec3,
        pivot: Vec3,
    },
    /// Scale from the current value to `to` (absolute).
    Scale {
        target: NodeId,
        duration: f32,
        to: Vec3,
    },
}

impl Animation {
    pub fn target(&self) -> NodeId {
        match self {
            Self::RotateByAxisWithPivot { target, .. } | Self::Scale { target, .. } => *target,
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        match self {
            Self::RotateByAxisWithPivot { duration, .. } | Self::Scale { duration, .. } => {
                *duration
            }
        }
    }
}

/// Something that can run animations and report when they finish.
pub trait AnimationDriver {
    /// Queue an animation. It runs concurrently with any already running.
    fn start(&mut self, animation: Animation) -> AnimationHandle;

    /// Whether the animation has completed. Unknown handles count as finished.
    fn is_finished(&self, handle: AnimationHandle) -> bool;
}
