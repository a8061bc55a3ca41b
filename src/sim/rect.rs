//! Integer axis-aligned rectangles
//!
//! Used both for collision boxes in logical screen space and for source and
//! destination regions when blitting sprites.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Exclusive bottom-right corner
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.origin + self.size
    }

    /// A rectangle with no area never intersects anything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True if the two rectangles share at least one pixel
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Overlapping region of two rectangles, if any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        let size = max - min;
        if size.x <= 0 || size.y <= 0 {
            return None;
        }
        Some(Rect { origin: min, size })
    }

    /// Multiply position and size by an integer factor
    pub fn scaled(&self, factor: i32) -> Rect {
        Rect {
            origin: self.origin * factor,
            size: self.size * factor,
        }
    }

    /// Move the rectangle by the given offset
    pub fn translated(&self, offset: IVec2) -> Rect {
        Rect {
            origin: self.origin + offset,
            size: self.size,
        }
    }
}
