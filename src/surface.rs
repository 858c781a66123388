//! The host surface the tracker measures against.
//!
//! A `Surface` is the windowing/DOM layer: it answers geometry queries for an
//! element handle and exposes the element tree for ancestor walks. Every method
//! is a read-only query. Implementations must not cache on the tracker's
//! behalf, since layout can change between any two calls.

use crate::types::{ClientBorder, ElementPositionInfo, OffsetBox, Point, Rect};

pub trait Surface {
    /// Cheap handle to an element on the surface.
    type Element: Clone + PartialEq + std::fmt::Debug;

    /// Bounding rectangle in viewport coordinates. Detached elements report
    /// whatever the host reports for them (usually an empty rect at the origin).
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Current scroll offsets of the containing surface.
    fn scroll_offsets(&self) -> Point;

    /// Position relative to the nearest positioned ancestor.
    fn offset_box(&self, element: &Self::Element) -> OffsetBox;

    fn client_border(&self, _element: &Self::Element) -> ClientBorder {
        ClientBorder::default()
    }

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Attribute value, or `None` if the attribute is absent.
    fn attribute(&self, element: &Self::Element, key: &str) -> Option<String>;
}

impl<S: Surface + ?Sized> Surface for &S {
    type Element = S::Element;

    fn bounding_rect(&self, element: &Self::Element) -> Rect {
        (**self).bounding_rect(element)
    }

    fn scroll_offsets(&self) -> Point {
        (**self).scroll_offsets()
    }

    fn offset_box(&self, element: &Self::Element) -> OffsetBox {
        (**self).offset_box(element)
    }

    fn client_border(&self, element: &Self::Element) -> ClientBorder {
        (**self).client_border(element)
    }

    fn parent(&self, element: &Self::Element) -> Option<Self::Element> {
        (**self).parent(element)
    }

    fn attribute(&self, element: &Self::Element, key: &str) -> Option<String> {
        (**self).attribute(element, key)
    }
}

/// Measure `element` on `surface`.
///
/// Returns `None` when there is no element. Nothing is cached: two calls with
/// no layout change in between produce identical results, and a layout change
/// is always reflected.
pub fn element_position_info<S: Surface + ?Sized>(
    surface: &S,
    element: Option<&S::Element>,
) -> Option<ElementPositionInfo> {
    let element = element?;
    let rect = surface.bounding_rect(element);
    let rect_corners = rect.corners();
    let absolute_corners = rect_corners.translated(surface.scroll_offsets());

    Some(ElementPositionInfo {
        client: surface.client_border(element),
        offset: surface.offset_box(element),
        rect,
        rect_corners,
        absolute_corners,
    })
}
