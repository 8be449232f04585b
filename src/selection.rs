use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter::filter;
use crate::model::GeoDocument;

/// Which list an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Route,
    Track,
    Waypoint,
}

/// State of a "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// The visible subset of a document, one index set per item kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    routes: BTreeSet<usize>,
    tracks: BTreeSet<usize>,
    waypoints: BTreeSet<usize>,
    counts: [usize; 3],
}

impl Selection {
    /// Everything in `doc` selected, which is how every fresh load starts.
    pub fn all(doc: &GeoDocument) -> Self {
        let counts = [doc.routes.len(), doc.tracks.len(), doc.waypoints.len()];
        Self {
            routes: (0..counts[0]).collect(),
            tracks: (0..counts[1]).collect(),
            waypoints: (0..counts[2]).collect(),
            counts,
        }
    }

    pub fn indices(&self, kind: ItemKind) -> &BTreeSet<usize> {
        match kind {
            ItemKind::Route => &self.routes,
            ItemKind::Track => &self.tracks,
            ItemKind::Waypoint => &self.waypoints,
        }
    }

    fn indices_mut(&mut self, kind: ItemKind) -> &mut BTreeSet<usize> {
        match kind {
            ItemKind::Route => &mut self.routes,
            ItemKind::Track => &mut self.tracks,
            ItemKind::Waypoint => &mut self.waypoints,
        }
    }

    fn count(&self, kind: ItemKind) -> usize {
        self.counts[kind as usize]
    }

    pub fn is_selected(&self, kind: ItemKind, index: usize) -> bool {
        self.indices(kind).contains(&index)
    }

    /// Returns whether anything changed. Indices past the end of the list
    /// are ignored.
    pub fn set(&mut self, kind: ItemKind, index: usize, selected: bool) -> bool {
        if index >= self.count(kind) {
            return false;
        }
        let set = self.indices_mut(kind);
        if selected {
            set.insert(index)
        } else {
            set.remove(&index)
        }
    }

    pub fn set_all(&mut self, kind: ItemKind, selected: bool) {
        let count = self.count(kind);
        let set = self.indices_mut(kind);
        if selected {
            set.extend(0..count);
        } else {
            set.clear();
        }
    }

    pub fn header_state(&self, kind: ItemKind) -> HeaderState {
        let selected = self.indices(kind).len();
        let count = self.count(kind);
        if count > 0 && selected == count {
            HeaderState::Checked
        } else if selected > 0 {
            HeaderState::Indeterminate
        } else {
            HeaderState::Unchecked
        }
    }

    pub fn apply(&self, doc: &GeoDocument) -> GeoDocument {
        filter(doc, &self.routes, &self.tracks, &self.waypoints)
    }
}
