//! A single display surface on the carousel ring.

use crate::scene::NodeId;

/// What a board shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardContent {
    Photo { texture: String },
    Video { source: String },
}

impl BoardContent {
    /// Asset name for logging
    pub fn asset(&self) -> &str {
        match self {
            Self::Photo { texture } => texture,
            Self::Video { source } => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Scene node whose transform this board drives
    pub node: NodeId,
    pub content: BoardContent,
    /// Angular position on the ring in degrees
    pub degree: f32,
}

impl Board {
    pub fn new(node: NodeId, content: BoardContent, index: usize, count: usize) -> Self {
        Self {
            node,
            content,
            degree: layout_degree(index, count),
        }
    }
}

/// Angular slot of board `index` when `count` boards share the ring evenly.
///
/// With the video in the last slot this is `360 * index / (photos + 1)`.
/// Without a video board the ring is spaced over the photos alone,
/// `360 * index / photos`.
pub fn layout_degree(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    360.0 * index as f32 / count as f32
}
