//! Geometry module: Pixel-space primitives used by measurement and positioning.
//!
//! All values are whole pixels (`i32`). Rectangles are position + size with
//! exclusive right/bottom edges.

mod insets;
mod rect;
mod size;

pub use insets::Insets;
pub use rect::Rect;
pub use size::Size;
