pub mod shapes;

pub use shapes::{HasBounds, Rect};
