//! Integer axis-aligned rectangles
//!
//! Positions are whole units with the origin at the top-left corner, y down.

use serde::{Deserialize, Serialize};

/// An axis-aligned box described by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: i32) {
        self.x = x;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: i32) {
        self.x = x - self.w;
    }

    /// Move so the top edge sits at `y`
    pub fn set_top(&mut self, y: i32) {
        self.y = y;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.y = y - self.h;
    }

    /// Center point (integer division, rounds toward the top-left)
    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add(self.w / 2),
            self.y.saturating_add(self.h / 2),
        )
    }

    /// Translate in place, saturating at the `i32` range
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// True if the two boxes share a non-empty area.
    ///
    /// Touching edges do not count, and an empty box never overlaps anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `other` lies entirely inside `self`
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Shift this box the minimum distance needed to sit inside `bounds`.
    ///
    /// On an axis where the box is larger than `bounds` it is centred instead.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = clamp_axis(self.x, self.w, bounds.x, bounds.w);
        self.y = clamp_axis(self.y, self.h, bounds.y, bounds.h);
    }
}

fn clamp_axis(pos: i32, len: i32, min: i32, span: i32) -> i32 {
    if len >= span {
        min + span / 2 - len / 2
    } else if pos < min {
        min
    } else if pos.saturating_add(len) > min + span {
        min + span - len
    } else {
        pos
    }
}
