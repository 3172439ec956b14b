// src/render/mod.rs
// Node figure geometry and drawing

pub mod figure;
pub mod style;
pub mod transform;

pub use figure::{DrawCommand, NodeFigure};
pub use style::DrawStyle;
pub use transform::{screen_to_nannou, Transform2D};
