//! Read-only queries: element geometry, event resolution and square overlap.

use super::DragSquareTracker;
use crate::event::CursorEvent;
use crate::overlap::{self, OverlapCase};
use crate::resolver::{self, ResolveOptions};
use crate::surface::{self, Surface};
use crate::types::{CursorPosition, ElementPositionInfo};

impl<S: Surface> DragSquareTracker<S> {
    /// Measure an element. Always re-queries the surface.
    pub fn get_element_position_info(&self, element: Option<&S::Element>) -> Option<ElementPositionInfo> {
        surface::element_position_info(&self.surface, element)
    }

    /// Resolve the element an event targets, using the configured
    /// ancestor depth for constraints without their own budget.
    pub fn get_element_from_event(
        &self,
        event: &CursorEvent<S::Element>,
        options: Option<&ResolveOptions>,
    ) -> Option<S::Element> {
        resolver::resolve_element(
            &self.surface,
            event,
            options,
            self.config.max_ancestor_check_depth,
        )
    }

    pub fn get_cursor_event_position_info(&self, event: &CursorEvent<S::Element>) -> CursorPosition {
        event.position()
    }

    /// Which overlap check, if any, puts `element` inside the current square.
    pub fn overlap_case(&self, element: Option<&S::Element>) -> Option<OverlapCase> {
        let element = element?;
        let square = self.square?;
        let corners = self.surface.bounding_rect(element).corners();
        overlap::classify_overlap(&square.corners, &corners)
    }

    /// Whether `element` intersects the current drag square. `false` when
    /// there is no element or no square.
    pub fn is_include_element_target_square(&self, element: Option<&S::Element>) -> bool {
        self.overlap_case(element).is_some()
    }

    /// Keep the elements that intersect the current square, in input order.
    pub fn select_included<I>(&self, elements: I) -> Vec<S::Element>
    where
        I: IntoIterator<Item = S::Element>,
    {
        if self.square.is_none() {
            return Vec::new();
        }
        elements
            .into_iter()
            .filter(|element| self.is_include_element_target_square(Some(element)))
            .collect()
    }
}
