use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "tree bounds must be finite with non-negative size (x: {}, y: {}, width: {}, height: {})",
                    x, y, width, height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
