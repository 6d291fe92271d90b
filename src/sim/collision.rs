//! Collision detection and response for axis-aligned boxes
//!
//! Everything in the arena is a box, so overlap is a plain AABB test and
//! wall response is a per-axis velocity flip.

use glam::Vec2;

use super::rect::Rect;

/// Which velocity components were negated by a wall bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Standard AABB overlap test (non-empty intersection on both axes)
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Index of the first box in `others` that overlaps `rect`
pub fn first_overlap<'a, I>(rect: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others.into_iter().position(|other| aabb_overlap(rect, other))
}

/// Push `rect` back inside `bounds` and bounce `vel` off every edge it crossed.
///
/// Each of the four edges is checked on its own: a crossed edge is snapped
/// back onto the boundary and the matching velocity component is negated.
/// Speed is preserved exactly.
pub fn reflect_within(rect: &mut Rect, vel: &mut Vec2, bounds: &Rect) -> Reflection {
    let mut reflection = Reflection::default();

    if rect.left() < bounds.left() {
        rect.set_left(bounds.left());
        vel.x = -vel.x;
        reflection.x = !reflection.x;
    }
    if rect.right() > bounds.right() {
        rect.set_right(bounds.right());
        vel.x = -vel.x;
        reflection.x = !reflection.x;
    }
    if rect.top() < bounds.top() {
        rect.set_top(bounds.top());
        vel.y = -vel.y;
        reflection.y = !reflection.y;
    }
    if rect.bottom() > bounds.bottom() {
        rect.set_bottom(bounds.bottom());
        vel.y = -vel.y;
        reflection.y = !reflection.y;
    }

    reflection
}
