//! Gazeboard - Gaze-Driven VR Gallery Carousel
//!
//! A ring of photo and video boards around the viewer that turns one slot
//! whenever the viewer looks up or down:
//! - `gaze`: front/up/down state machine with a single in-flight turn
//! - `carousel`: board layout and wrapping selection
//! - `animation`: start/poll animation capability and an in-process engine
//! - `scene`: transforms, scene graph and stereo camera rig
//! - `gallery`: builds the gallery scene and runs the per-frame step

pub mod animation;
pub mod carousel;
pub mod config;
pub mod error;
pub mod gallery;
pub mod gaze;
pub mod scene;

pub use config::Config;
pub use error::{GazeboardError, Result};
pub use gallery::Gallery;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
