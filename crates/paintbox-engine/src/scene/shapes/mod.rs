mod circle;
mod point;
mod triangle;

pub use circle::Circle;
pub use point::{Point, POINT_SIZE_MAX, POINT_SIZE_MIN};
pub use triangle::Triangle;
