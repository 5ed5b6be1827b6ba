//! Configuration parsing and management for Gazeboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::animation::Easing;
use crate::error::{ConfigError, GazeboardError};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gaze: GazeConfig,
    pub carousel: CarouselConfig,
    pub animation: AnimationConfig,
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GazeboardError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> Result<Self, GazeboardError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load configuration from default paths
    pub fn load() -> Result<Self, GazeboardError> {
        let paths = [
            PathBuf::from("gazeboard.toml"),
            PathBuf::from("config/gazeboard.toml"),
            dirs_path().join("config.toml"),
        ];

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GazeboardError> {
        if !(self.gaze.threshold > 0.0 && self.gaze.threshold < 1.0) {
            return Err(invalid("gaze.threshold", "Threshold must be between 0.0 and 1.0"));
        }

        if self.carousel.board_count() == 0 {
            return Err(invalid("carousel.photos", "At least one board is required"));
        }

        if self.carousel.selected_scale <= 0.0 {
            return Err(invalid(
                "carousel.selected_scale",
                "Selected scale must be greater than 0",
            ));
        }

        if self.carousel.board_width <= 0.0 || self.carousel.board_height <= 0.0 {
            return Err(invalid(
                "carousel.board_width",
                "Board dimensions must be greater than 0",
            ));
        }

        if self.carousel.radius <= 0.0 {
            return Err(invalid("carousel.radius", "Radius must be greater than 0"));
        }

        if self.animation.duration_secs < 0.0 {
            return Err(invalid(
                "animation.duration_secs",
                "Duration must not be negative",
            ));
        }

        if self.simulation.fps == 0 {
            return Err(invalid("simulation.fps", "Frame rate must be greater than 0"));
        }

        if self.simulation.period_secs <= 0.0 {
            return Err(invalid(
                "simulation.period_secs",
                "Head motion period must be greater than 0",
            ));
        }

        if self.simulation.amplitude_deg.abs() > 90.0 {
            tracing::warn!(
                "Head pitch amplitude {} exceeds 90 degrees; gaze will wrap past vertical",
                self.simulation.amplitude_deg
            );
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> GazeboardError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Gaze state machine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    /// Vertical look-at component that counts as looking up/down
    pub threshold: f32,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self { threshold: 0.2 }
    }
}

/// Board layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Photo textures, one board each, in angular order
    pub photos: Vec<String>,
    /// Video source placed after the photos (empty string disables it)
    pub video: Option<String>,
    /// Board quad width
    pub board_width: f32,
    /// Board quad height
    pub board_height: f32,
    /// Distance from the viewer to each board
    pub radius: f32,
    /// Scale applied to the selected board
    pub selected_scale: f32,
    /// Initial yaw of the board ring in degrees
    pub initial_yaw_deg: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            photos: (1..=9).map(|i| format!("photo_{}.jpg", i)).collect(),
            video: Some("tron.mp4".to_string()),
            board_width: 2.0,
            board_height: 1.0,
            radius: 5.0,
            selected_scale: 2.0,
            initial_yaw_deg: 90.0,
        }
    }
}

impl CarouselConfig {
    /// Total number of boards including the video
    pub fn board_count(&self) -> usize {
        self.photos.len() + usize::from(self.video_source().is_some())
    }

    /// Configured video source, if any
    pub fn video_source(&self) -> Option<&str> {
        self.video.as_deref().filter(|v| !v.is_empty())
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration shared by the rotation and both scale animations
    pub duration_secs: f32,
    /// Easing curve
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.3,
            easing: Easing::Linear,
        }
    }
}

/// Camera rig and backdrop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Clear colour (RGBA, 0.0 - 1.0)
    pub background: [f32; 4],
    /// Mesh used for the per-eye backdrop
    pub screen_mesh: String,
    /// Backdrop texture for the left eye
    pub left_screen: String,
    /// Backdrop texture for the right eye
    pub right_screen: String,
    /// Uniform scale of the backdrop spheres
    pub screen_scale: f32,
    /// Apply the sepia post-effect to both eyes
    pub sepia: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            screen_mesh: "sphere.obj".to_string(),
            left_screen: "left_screen.png".to_string(),
            right_screen: "right_screen.png".to_string(),
            screen_scale: 10.0,
            sepia: true,
        }
    }
}

/// Headless head-tracking simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frames per second
    pub fps: u32,
    /// Total frames to run (0 = until interrupted)
    pub frames: u64,
    /// Peak head pitch in degrees
    pub amplitude_deg: f32,
    /// Seconds per full up/down cycle
    pub period_secs: f32,
    /// Sleep between frames to match wall-clock time
    pub realtime: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            frames: 600,
            amplitude_deg: 25.0,
            period_secs: 4.0,
            realtime: true,
        }
    }
}

/// Get the platform-specific configuration directory
fn dirs_path() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(config_dir).join("gazeboard");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config/gazeboard");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Application Support/gazeboard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("gazeboard");
        }
    }

    PathBuf::from(".")
}
