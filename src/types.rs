//! Core value types for drag-square tracking.
//!
//! Everything here is a plain value: points, rectangles, corner sets and the
//! samples the tracker captures at press, move and release. All coordinates are
//! `f64` and no rounding is applied anywhere.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Points and Rectangles
// ============================================================================

/// A position on the 2D client/page plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle in viewport coordinates, as returned by a bounding
/// rect query. Width and height are kept raw and may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn corners(&self) -> RectCorners {
        RectCorners::from_rect(self)
    }
}

/// The four axis-aligned corner points of a rectangle.
///
/// Always derived from an origin and a size, so `top_right.x == top_left.x + width`
/// and `bottom_left.y == top_left.y + height` hold by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl RectCorners {
    pub fn from_rect(rect: &Rect) -> Self {
        Self::from_parts(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn from_parts(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(left + width, top),
            bottom_left: Point::new(left, top + height),
            bottom_right: Point::new(left + width, top + height),
        }
    }

    /// Shift every corner by `delta`.
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            top_left: self.top_left + delta,
            top_right: self.top_right + delta,
            bottom_left: self.bottom_left + delta,
            bottom_right: self.bottom_right + delta,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.bottom_right.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom_right.y
    }

    /// Corners in top-left, top-right, bottom-left, bottom-right order.
    pub fn points(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }

    /// Inclusive point-in-rectangle test against the top-left/bottom-right bounds.
    ///
    /// A rectangle with negative width or height contains nothing.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    #[inline]
    pub fn spans_x(&self, x: f64) -> bool {
        x >= self.left() && x <= self.right()
    }

    #[inline]
    pub fn spans_y(&self, y: f64) -> bool {
        y >= self.top() && y <= self.bottom()
    }
}

// ============================================================================
// Element Position
// ============================================================================

/// Border offsets of an element relative to its own padding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientBorder {
    pub top: f64,
    pub left: f64,
}

/// Position and size relative to the nearest positioned ancestor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Snapshot of where an element sits, computed fresh on every query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementPositionInfo {
    /// Relative to the element itself (border widths)
    pub client: ClientBorder,
    /// Relative to the nearest positioned ancestor
    pub offset: OffsetBox,
    /// Relative to the viewport
    pub rect: Rect,
    /// Viewport corners of `rect`
    pub rect_corners: RectCorners,
    /// Viewport corners plus the surface scroll offsets
    pub absolute_corners: RectCorners,
}

// ============================================================================
// Cursor Samples
// ============================================================================

/// Normalized pointer coordinates.
///
/// `page` is invariant to scroll: the same physical spot on the surface yields
/// the same page coordinate whatever the scroll position was at capture time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub client: Option<Point>,
    pub page: Option<Point>,
}

impl CursorPosition {
    pub const EMPTY: CursorPosition = CursorPosition {
        client: None,
        page: None,
    };

    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.page.is_none()
    }
}

/// Element, its rect and the cursor position captured at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorSample<E> {
    pub element: E,
    pub rect: Rect,
    pub cursor_position: CursorPosition,
}

// ============================================================================
// Drag Square
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
    Top,
    Bottom,
}

/// The live selection rectangle, in viewport coordinates.
///
/// `width` and `height` are raw: a drag shorter than twice the margin gives a
/// negative extent, and that value is what the overlap predicate sees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSquareInfo {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub corners: RectCorners,
}

impl DragSquareInfo {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
            corners: RectCorners::from_parts(left, top, width, height),
        }
    }

    /// Size with negative extents clamped to zero, for rendering.
    pub fn clamped_size(&self) -> (f64, f64) {
        (self.width.max(0.0), self.height.max(0.0))
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Published when a drag completes. Each new one replaces the last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragEndEvent<E> {
    pub end_info: CursorSample<E>,
}
