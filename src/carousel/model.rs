//! Ordered ring of boards with a wrapping selection.

use super::board::Board;
use crate::error::SceneError;
use crate::scene::NodeId;

#[derive(Debug, Clone)]
pub struct CarouselModel {
    /// Node all boards hang from; rotating it turns the ring
    parent: NodeId,
    /// Insertion order is angular order
    boards: Vec<Board>,
    /// Always in `0..boards.len()`
    selected: usize,
}

impl CarouselModel {
    /// Build a model with board 0 selected.
    pub fn new(parent: NodeId, boards: Vec<Board>) -> Result<Self, SceneError> {
        if boards.is_empty() {
            return Err(SceneError::EmptyCarousel);
        }
        Ok(Self {
            parent,
            boards,
            selected: 0,
        })
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Never true; construction rejects empty rings.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_board(&self) -> &Board {
        &self.boards[self.selected]
    }

    /// Rotation in degrees that moves the ring by one slot.
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.boards.len() as f32
    }

    /// Move the selection one slot back, wrapping to the end.
    /// Returns `(old, new)` indices.
    pub fn select_previous(&mut self) -> (usize, usize) {
        let old = self.selected;
        self.selected = (old + self.boards.len() - 1) % self.boards.len();
        (old, self.selected)
    }

    /// Move the selection one slot forward, wrapping to the start.
    /// Returns `(old, new)` indices.
    pub fn select_next(&mut self) -> (usize, usize) {
        let old = self.selected;
        self.selected = (old + 1) % self.boards.len();
        (old, self.selected)
    }
}
