//! Pointer event shapes and coordinate extraction.
//!
//! Hosts deliver mouse, touch and pointer events, either straight from the
//! platform or wrapped by a UI framework. They all collapse into one tagged
//! enum here, and everything downstream works only on the normalized
//! `CursorPosition`.

use crate::types::{CursorPosition, Point};
use serde::{Deserialize, Serialize};

/// Where an event came from. Wrapped events carry the same coordinates as
/// their native counterparts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOrigin {
    #[default]
    Native,
    Framework,
}

/// Coordinates of a single contact point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub client: Point,
    pub page: Point,
}

impl ContactPoint {
    pub const fn new(client: Point, page: Point) -> Self {
        Self { client, page }
    }

    /// A contact on an unscrolled surface, where client and page coincide.
    pub const fn unscrolled(x: f64, y: f64) -> Self {
        Self {
            client: Point::new(x, y),
            page: Point::new(x, y),
        }
    }
}

/// A pointer event as delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CursorEvent<E> {
    Mouse {
        target: Option<E>,
        origin: EventOrigin,
        contact: ContactPoint,
    },
    Pointer {
        target: Option<E>,
        origin: EventOrigin,
        contact: ContactPoint,
    },
    Touch {
        target: Option<E>,
        origin: EventOrigin,
        /// Active touches, first one is primary
        touches: Vec<ContactPoint>,
    },
    /// Any event shape the extractor does not understand
    Other { target: Option<E> },
}

impl<E> CursorEvent<E> {
    pub fn mouse(target: Option<E>, contact: ContactPoint) -> Self {
        Self::Mouse {
            target,
            origin: EventOrigin::Native,
            contact,
        }
    }

    pub fn pointer(target: Option<E>, contact: ContactPoint) -> Self {
        Self::Pointer {
            target,
            origin: EventOrigin::Native,
            contact,
        }
    }

    pub fn touch(target: Option<E>, touches: Vec<ContactPoint>) -> Self {
        Self::Touch {
            target,
            origin: EventOrigin::Native,
            touches,
        }
    }

    /// Mark this event as wrapped by a UI framework.
    pub fn wrapped(mut self) -> Self {
        match &mut self {
            Self::Mouse { origin, .. } | Self::Pointer { origin, .. } | Self::Touch { origin, .. } => {
                *origin = EventOrigin::Framework;
            }
            Self::Other { .. } => {}
        }
        self
    }

    pub fn target(&self) -> Option<&E> {
        match self {
            Self::Mouse { target, .. }
            | Self::Pointer { target, .. }
            | Self::Touch { target, .. }
            | Self::Other { target } => target.as_ref(),
        }
    }

    pub fn origin(&self) -> Option<EventOrigin> {
        match self {
            Self::Mouse { origin, .. } | Self::Pointer { origin, .. } | Self::Touch { origin, .. } => {
                Some(*origin)
            }
            Self::Other { .. } => None,
        }
    }

    /// Normalize to client and page coordinates.
    ///
    /// Touch events use the first active touch. Unrecognized events and touch
    /// events with no active touches give an empty position. Never fails.
    pub fn position(&self) -> CursorPosition {
        let contact = match self {
            Self::Mouse { contact, .. } | Self::Pointer { contact, .. } => Some(contact),
            Self::Touch { touches, .. } => touches.first(),
            Self::Other { .. } => None,
        };

        match contact {
            Some(contact) => CursorPosition {
                client: Some(contact.client),
                page: Some(contact.page),
            },
            None => CursorPosition::EMPTY,
        }
    }
}

/// Free-function form of [`CursorEvent::position`].
pub fn cursor_event_position<E>(event: &CursorEvent<E>) -> CursorPosition {
    event.position()
}
