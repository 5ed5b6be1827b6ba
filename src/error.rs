//! Error types for Gazeboard

use thiserror::Error;

use crate::scene::NodeId;

/// Main error type for Gazeboard
#[derive(Error, Debug)]
pub enum GazeboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Scene graph and carousel construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    #[error("Scene node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Carousel needs at least one board")]
    EmptyCarousel,

    #[error("Attaching {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
}

/// Result type alias for Gazeboard operations
pub type Result<T> = std::result::Result<T, GazeboardError>;
