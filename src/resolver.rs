//! Resolve the element a pointer event targets.
//!
//! Without constraints the event target is returned as-is. With constraints the
//! resolver walks from the target up through its ancestors, testing attribute
//! constraints at each level, and stops at the first level that satisfies the
//! combinator. The walk is bounded by the largest per-constraint depth budget;
//! running out of budget falls back to the target itself.

use crate::event::CursorEvent;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How an attribute value is compared against the expected value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Exact equality
    #[default]
    FullMatch,
    /// Substring containment
    Include,
}

/// How multiple constraints combine at a single ancestor level.
///
/// Defaults to `And` when a payload leaves the combinator out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every constraint matches on the same element
    #[default]
    And,
    /// At least one constraint matches
    Or,
}

/// A single attribute requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMatch {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub mode: MatchMode,
    /// Levels this constraint may be checked on, target included. Falls back
    /// to the configured default when unset.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl AttributeMatch {
    pub fn full_match(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            mode: MatchMode::FullMatch,
            max_depth: None,
        }
    }

    pub fn include(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            mode: MatchMode::Include,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Absent attributes never match.
    pub fn matches(&self, actual: Option<&str>) -> bool {
        match (actual, self.mode) {
            (None, _) => false,
            (Some(actual), MatchMode::FullMatch) => actual == self.value,
            (Some(actual), MatchMode::Include) => actual.contains(self.value.as_str()),
        }
    }
}

/// Constraints for [`resolve_element`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    pub required: Vec<AttributeMatch>,
    #[serde(default)]
    pub combinator: Combinator,
}

impl ResolveOptions {
    pub fn all(required: Vec<AttributeMatch>) -> Self {
        Self {
            required,
            combinator: Combinator::And,
        }
    }

    pub fn any(required: Vec<AttributeMatch>) -> Self {
        Self {
            required,
            combinator: Combinator::Or,
        }
    }
}

/// Find the element an event targets, honoring attribute constraints.
///
/// Returns the direct target if no level within the depth budget satisfies
/// the constraints. Returns `None` if the event has no target, or if the
/// ancestor chain ends before a match while budget remains.
pub fn resolve_element<S: Surface + ?Sized>(
    surface: &S,
    event: &CursorEvent<S::Element>,
    options: Option<&ResolveOptions>,
    default_depth: usize,
) -> Option<S::Element> {
    let target = event.target()?.clone();

    let Some(options) = options.filter(|o| !o.required.is_empty()) else {
        return Some(target);
    };

    let budget = |item: &AttributeMatch| item.max_depth.unwrap_or(default_depth);
    let max_depth = options.required.iter().map(budget).max().unwrap_or(0);

    let mut current = Some(target.clone());
    for depth in 0..max_depth {
        let element = current?;

        let matched = options
            .required
            .iter()
            .filter(|item| depth < budget(*item))
            .filter(|item| item.matches(surface.attribute(&element, &item.key).as_deref()))
            .count();

        let satisfied = match options.combinator {
            Combinator::And => matched == options.required.len(),
            Combinator::Or => matched > 0,
        };

        if satisfied {
            trace!(depth, ?element, "Resolved element from event");
            return Some(element);
        }

        current = surface.parent(&element);
    }

    trace!(max_depth, "Depth budget exhausted, using event target");
    Some(target)
}
