//! Floating-point geometric primitives.

mod edge;
mod point2;
mod polar;
mod triangle;
mod vec2;

pub use edge::Edge;
pub use point2::Point2;
pub use polar::PolarPoint;
pub use triangle::Triangle;
pub use vec2::Vec2;
