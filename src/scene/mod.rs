//! Scene model mutated by the carousel
//!
//! Transforms, a parent/child node arena and a stereo camera rig.

pub mod camera;
pub mod graph;
pub mod post_effect;
pub mod transform;

pub use camera::{Camera, CameraRig};
pub use graph::{NodeId, RenderMask, Renderable, SceneGraph, SceneNode};
pub use post_effect::PostEffect;
pub use transform::Transform;
