use rand::Rng;

/// Axis-aligned bounding box, anchored at its top-left corner.
///
/// All coordinates handed to the broad-phase tree are expected to be in the
/// same space as the tree's root bounds; any anchor/scale/parent-transform
/// math happens upstream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Random box of the given size placed fully inside this rect, for tests
    /// and benchmarks.
    pub fn random_rect_inside<R: Rng>(&self, width: f32, height: f32, rng: &mut R) -> Rect {
        Rect {
            x: Self::_safe_randf32(rng, self.left(), self.right() - width),
            y: Self::_safe_randf32(rng, self.top(), self.bottom() - height),
            width,
            height,
        }
    }

    fn _safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Contract between the broad-phase tree and the rest of the engine: any
/// tracked entity exposes its world-space AABB.
pub trait HasBounds {
    fn bounds(&self) -> Rect;
}

impl HasBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
