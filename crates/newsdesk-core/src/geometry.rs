#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle for layout bounds and hit testing.
///
/// Uses CSS pixel coordinates (origin at top-left of the layout root).
/// Coordinates are `f64` because pointer positions and percentage-derived
/// widths are fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center line.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a new rectangle inside the current one with the given margin.
    ///
    /// Width and height never go below zero.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: (self.width - margin.horizontal_sum()).max(0.0),
            height: (self.height - margin.vertical_sum()).max(0.0),
        }
    }

    /// Split off the top `height` pixels, returning `(top, rest)`.
    ///
    /// `height` is clamped to the rectangle's own height.
    pub fn split_top(&self, height: f64) -> (Rect, Rect) {
        let taken = height.clamp(0.0, self.height.max(0.0));
        (
            Rect::new(self.x, self.y, self.width, taken),
            Rect::new(self.x, self.y + taken, self.width, self.height - taken),
        )
    }

    /// Grow horizontally by `slop` on both sides (hit areas for thin handles).
    pub fn expand_x(&self, slop: f64) -> Rect {
        Rect::new(
            self.x - slop,
            self.y,
            self.width + slop * 2.0,
            self.height,
        )
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: f64) -> Self {
        Self {
            top: 0.0,
            right: val,
            bottom: 0.0,
            left: val,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(5.9, 7.9));
        assert!(!rect.contains(6.0, 3.0));
        assert!(!rect.contains(2.0, 8.0));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.inner(Sides {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        });
        assert_eq!(inner, Rect::new(4.0, 1.0, 4.0, 6.0));
    }

    #[test]
    fn rect_inner_never_negative() {
        let inner = Rect::new(0.0, 0.0, 3.0, 3.0).inner(Sides::all(5.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
        assert!(inner.is_empty());
    }

    #[test]
    fn split_top_clamps() {
        let rect = Rect::from_size(100.0, 50.0);
        let (top, rest) = rect.split_top(64.0);
        assert_eq!(top, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(rest.height, 0.0);

        let (top, rest) = rect.split_top(10.0);
        assert_eq!(top.height, 10.0);
        assert_eq!(rest, Rect::new(0.0, 10.0, 100.0, 40.0));
    }

    #[test]
    fn expand_x_grows_both_sides() {
        let rect = Rect::new(10.0, 0.0, 4.0, 20.0).expand_x(6.0);
        assert_eq!(rect, Rect::new(4.0, 0.0, 16.0, 20.0));
    }

    #[test]
    fn sides_sums() {
        let sides = Sides {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        assert_eq!(sides.horizontal_sum(), 6.0);
        assert_eq!(sides.vertical_sum(), 4.0);
        assert_eq!(Sides::from(2.0), Sides::all(2.0));
        assert_eq!(Sides::horizontal(3.0).vertical_sum(), 0.0);
    }
}
