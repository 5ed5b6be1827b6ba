//! Easing curves for animation progress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    QuadInOut,
    CubicIn,
    CubicOut,
}

impl Easing {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "quad_in_out" | "quadinout" => Self::QuadInOut,
            "cubic_out" | "cubicout" => Self::CubicOut,
            "cubic_in" | "cubicin" => Self::CubicIn,
            _ => Self::Linear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadInOut => "quad_in_out",
            Self::CubicIn => "cubic_in",
            Self::CubicOut => "cubic_out",
        }
    }

    /// Evaluate the curve at t in [0, 1]. Endpoints map to themselves.
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}
