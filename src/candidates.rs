//! Candidate index for drag-square selection.
//!
//! Hosts with many selectable elements can load their viewport rects into an
//! R-tree once per layout pass and ask which of them the current square picks
//! up. An envelope query narrows the set in O(log n), then each hit goes
//! through the same four-case overlap test the tracker uses, so results agree
//! with `is_include_element_target_square`.

use crate::constants::QUERY_WARN_THRESHOLD_MS;
use crate::overlap;
use crate::profile_scope;
use crate::types::{DragSquareInfo, Point, Rect, RectCorners};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// A candidate element's viewport rect.
#[derive(Debug, Clone, Copy)]
pub struct CandidateEntry<Id> {
    pub id: Id,
    pub corners: RectCorners,
    seq: u64,
}

impl<Id> CandidateEntry<Id> {
    fn new(id: Id, rect: &Rect, seq: u64) -> Self {
        Self {
            id,
            corners: rect.corners(),
            seq,
        }
    }
}

impl<Id> RTreeObject for CandidateEntry<Id> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let c = &self.corners;
        AABB::from_corners([c.left(), c.top()], [c.right(), c.bottom()])
    }
}

impl<Id: PartialEq> PartialEq for CandidateEntry<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

pub struct CandidateIndex<Id> {
    tree: RTree<CandidateEntry<Id>>,
    entries: HashMap<Id, CandidateEntry<Id>>,
    next_seq: u64,
}

impl<Id> CandidateIndex<Id>
where
    Id: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Bulk-load an index. Later duplicates of an id replace earlier ones.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = (Id, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(rects);
        index
    }

    pub fn insert(&mut self, id: Id, rect: Rect) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }

        let entry = CandidateEntry::new(id, &rect, self.next_seq);
        self.next_seq += 1;
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: Id) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Replace the whole index, e.g. after a layout pass.
    pub fn rebuild<I>(&mut self, rects: I)
    where
        I: IntoIterator<Item = (Id, Rect)>,
    {
        self.entries.clear();
        self.next_seq = 0;
        for (id, rect) in rects {
            let entry = CandidateEntry::new(id, &rect, self.next_seq);
            self.next_seq += 1;
            self.entries.insert(id, entry);
        }
        self.tree = RTree::bulk_load(self.entries.values().copied().collect());
    }

    /// Ids whose rect intersects `square`, in insertion order.
    pub fn query_square(&self, square: &DragSquareInfo) -> Vec<Id> {
        profile_scope!("query_square", QUERY_WARN_THRESHOLD_MS);

        let c = &square.corners;
        let envelope = AABB::from_corners([c.left(), c.top()], [c.right(), c.bottom()]);

        let mut hits: Vec<&CandidateEntry<Id>> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| overlap::intersects(&square.corners, &entry.corners))
            .collect();
        hits.sort_by_key(|entry| entry.seq);

        trace!(candidates = self.entries.len(), hits = hits.len(), "Square query");
        hits.into_iter().map(|entry| entry.id).collect()
    }

    /// Ids whose rect contains `point` (inclusive), in insertion order.
    pub fn query_point(&self, point: Point) -> Vec<Id> {
        let envelope = AABB::from_point([point.x, point.y]);

        let mut hits: Vec<&CandidateEntry<Id>> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.corners.contains_point(point))
            .collect();
        hits.sort_by_key(|entry| entry.seq);
        hits.into_iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
        self.next_seq = 0;
    }
}

impl<Id> Default for CandidateIndex<Id>
where
    Id: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
