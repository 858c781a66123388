//! Rectangle overlap test between the drag square and an element.
//!
//! A plain corner-containment test misses crossing configurations, where a
//! tall narrow element crosses a wide short square and neither rectangle has a
//! corner inside the other. The test is therefore four independent checks,
//! OR-combined:
//!
//! ```text
//! 1. CornerInSquare    any element corner inside the square
//! 2. ColumnCrossing    element left/right edge inside the square's x-span
//!                      and square top/bottom edge inside the element's y-span
//! 3. RowCrossing       element top/bottom edge inside the square's y-span
//!                      and square left/right edge inside the element's x-span
//! 4. SquareInElement   every square corner inside the element
//! ```
//!
//! All boundary comparisons are inclusive, so touching edges count.

use crate::types::RectCorners;
use serde::{Deserialize, Serialize};

/// Which check detected an overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapCase {
    CornerInSquare,
    ColumnCrossing,
    RowCrossing,
    SquareInElement,
}

/// First matching case in check order, or `None` when the rectangles are
/// disjoint.
pub fn classify_overlap(square: &RectCorners, element: &RectCorners) -> Option<OverlapCase> {
    if corner_in_square(square, element) {
        Some(OverlapCase::CornerInSquare)
    } else if column_crossing(square, element) {
        Some(OverlapCase::ColumnCrossing)
    } else if row_crossing(square, element) {
        Some(OverlapCase::RowCrossing)
    } else if square_in_element(square, element) {
        Some(OverlapCase::SquareInElement)
    } else {
        None
    }
}

#[inline]
pub fn intersects(square: &RectCorners, element: &RectCorners) -> bool {
    classify_overlap(square, element).is_some()
}

fn corner_in_square(square: &RectCorners, element: &RectCorners) -> bool {
    element.points().iter().any(|p| square.contains_point(*p))
}

fn column_crossing(square: &RectCorners, element: &RectCorners) -> bool {
    (square.spans_x(element.left()) || square.spans_x(element.right()))
        && (element.spans_y(square.top()) || element.spans_y(square.bottom()))
}

fn row_crossing(square: &RectCorners, element: &RectCorners) -> bool {
    (square.spans_y(element.top()) || square.spans_y(element.bottom()))
        && (element.spans_x(square.left()) || element.spans_x(square.right()))
}

fn square_in_element(square: &RectCorners, element: &RectCorners) -> bool {
    square.points().iter().all(|p| element.contains_point(*p))
}
