//! Carousel of boards arranged around the viewer

pub mod board;
pub mod model;

pub use board::{layout_degree, Board, BoardContent};
pub use model::CarouselModel;
