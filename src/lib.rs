//! Pointer drag-square tracking and element selection.
//!
//! A [`DragSquareTracker`] follows a pointer through press, move and release
//! over a host [`Surface`] and keeps an axis-aligned selection square in
//! viewport coordinates, compensating for scrolling since the press. Any
//! element's rect can then be tested against the square with a four-case
//! overlap predicate that also catches crossing rectangles.
//!
//! ```ignore
//! let mut tracker = DragSquareTracker::new(surface);
//! tracker.set_press(Some(&body), &down)?;
//! tracker.set_moving(&moved);
//! let selected = tracker.select_included(cells.iter().cloned());
//! tracker.set_end(&up);
//! ```

pub mod candidates;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod logging;
pub mod overlap;
pub mod perf;
pub mod resolver;
pub mod surface;
pub mod tracker;
pub mod types;

pub use candidates::CandidateIndex;
pub use config::TrackerConfig;
pub use error::{ConfigError, ConfigResult, TrackerError, TrackerResult};
pub use event::{ContactPoint, CursorEvent, EventOrigin};
pub use overlap::OverlapCase;
pub use resolver::{AttributeMatch, Combinator, MatchMode, ResolveOptions};
pub use surface::Surface;
pub use tracker::{DragSquareTracker, TrackerNotification, TrackerState};
pub use types::{
    CursorPosition, CursorSample, DragEndEvent, DragSquareInfo, ElementPositionInfo,
    HorizontalDirection, Point, Rect, RectCorners, VerticalDirection,
};
