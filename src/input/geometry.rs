//! Draw rectangle and zone arithmetic.

use crate::layout::ZONE_SIZE;

/// On-screen bounds of the keyboard, supplied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl DrawRect {
    /// Creates a new rectangle. Width and height must be positive.
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                left,
                top,
                width,
                height,
            })
        }
    }

    /// Creates a rectangle, raising a width or height below one pixel to one.
    pub fn new_clamped(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Maps a raw point to the (column, row) third it falls in, each in `0..=2`.
    ///
    /// Points left of or above the rectangle clamp to 0, points on or beyond
    /// the far edge clamp to 2.
    pub fn third_index(&self, raw_x: i32, raw_y: i32) -> (usize, usize) {
        (
            third(raw_x, self.left, self.width),
            third(raw_y, self.top, self.height),
        )
    }
}

fn third(raw: i32, origin: i32, extent: i32) -> usize {
    // i64 so far-off coordinates cannot overflow the multiply
    let local = i64::from(raw) - i64::from(origin);
    let zones = ZONE_SIZE as i64;
    let index = (local * zones).div_euclid(i64::from(extent));
    index.clamp(0, zones - 1) as usize
}

/// Coarse zone chosen by a touch-down, as cell offsets in `{0, 3, 6}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrant {
    pub x: usize,
    pub y: usize,
}

impl Quadrant {
    /// Builds the zone for third indices `xi`, `yi`; out-of-range indices clamp.
    pub fn from_index(xi: usize, yi: usize) -> Self {
        Self {
            x: xi.min(ZONE_SIZE - 1) * ZONE_SIZE,
            y: yi.min(ZONE_SIZE - 1) * ZONE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_requires_positive_size() {
        assert!(DrawRect::new(0, 0, 0, 100).is_none());
        assert!(DrawRect::new(0, 0, 100, -1).is_none());
        assert!(DrawRect::new(-50, 20, 1, 1).is_some());
    }

    #[test]
    fn test_new_clamped_never_degenerate() {
        let rect = DrawRect::new_clamped(5, 6, 0, -40);
        assert_eq!((rect.left(), rect.top(), rect.width(), rect.height()), (5, 6, 1, 1));
        // Every point falls in the last third of a one-pixel rect, without dividing by zero
        assert_eq!(rect.third_index(5, 6), (0, 0));
        assert_eq!(rect.third_index(6, 7), (2, 2));
    }

    #[test]
    fn test_third_index_boundaries() {
        let rect = DrawRect::new(0, 0, 900, 900).unwrap();
        assert_eq!(rect.third_index(0, 0), (0, 0));
        assert_eq!(rect.third_index(299, 299), (0, 0));
        assert_eq!(rect.third_index(300, 599), (1, 1));
        assert_eq!(rect.third_index(600, 899), (2, 2));
        assert_eq!(rect.third_index(900, 900), (2, 2));
    }

    #[test]
    fn test_third_index_clamps() {
        let rect = DrawRect::new(0, 0, 900, 900).unwrap();
        assert_eq!(rect.third_index(-1000, -1), (0, 0));
        assert_eq!(rect.third_index(10_000, i32::MAX), (2, 2));
        assert_eq!(rect.third_index(i32::MIN, 450), (0, 1));
    }

    #[test]
    fn test_third_index_subtracts_origin() {
        let rect = DrawRect::new(100, 1000, 300, 90).unwrap();
        assert_eq!(rect.third_index(100, 1000), (0, 0));
        assert_eq!(rect.third_index(250, 1045), (1, 1));
        assert_eq!(rect.third_index(399, 1089), (2, 2));
        // Left of the origin but inside the first third in absolute terms
        assert_eq!(rect.third_index(50, 900), (0, 0));
    }

    #[test]
    fn test_quadrant_from_index() {
        assert_eq!(Quadrant::from_index(0, 0), Quadrant { x: 0, y: 0 });
        assert_eq!(Quadrant::from_index(1, 2), Quadrant { x: 3, y: 6 });
        assert_eq!(Quadrant::from_index(7, 1), Quadrant { x: 6, y: 3 });
    }
}
