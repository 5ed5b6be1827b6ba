//! Head-gaze state machine driving the carousel

pub mod controller;
pub mod mode;

pub use controller::{GazeController, GazeSettings, Rotation, StepOutcome};
pub use mode::{GazeMode, RotationDirection};
