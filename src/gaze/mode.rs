//! Vertical gaze modes and carousel turn directions.

/// Where the viewer is looking, vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GazeMode {
    Front,
    Up,
    Down,
}

impl Default for GazeMode {
    fn default() -> Self {
        Self::Front
    }
}

impl GazeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for GazeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction the ring turns, seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// Positive yaw; selection moves to the previous board
    CounterClockwise,
    /// Negative yaw; selection moves to the next board
    Clockwise,
}

impl RotationDirection {
    /// Sign applied to the per-slot rotation angle
    pub fn sign(self) -> f32 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

impl std::fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CounterClockwise => write!(f, "counter-clockwise"),
            Self::Clockwise => write!(f, "clockwise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_front() {
        assert_eq!(GazeMode::default(), GazeMode::Front);
    }

    #[test]
    fn test_display() {
        assert_eq!(GazeMode::Up.to_string(), "up");
        assert_eq!(GazeMode::Down.as_str(), "down");
        assert_eq!(RotationDirection::Clockwise.to_string(), "clockwise");
        assert_eq!(
            RotationDirection::CounterClockwise.to_string(),
            "counter-clockwise"
        );
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(RotationDirection::CounterClockwise.sign(), 1.0);
        assert_eq!(RotationDirection::Clockwise.sign(), -1.0);
    }
}
