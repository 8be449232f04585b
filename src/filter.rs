use std::collections::BTreeSet;

use crate::model::*;

/// Derive the view of `doc` restricted to the selected item indices.
///
/// Items keep their document order regardless of how the sets were built.
/// Bounds are recomputed over the retained points; when nothing is
/// retained the unfiltered bounds are kept so the viewport does not
/// collapse. Metadata passes through untouched.
pub fn filter(
    doc: &GeoDocument,
    routes: &BTreeSet<usize>,
    tracks: &BTreeSet<usize>,
    waypoints: &BTreeSet<usize>,
) -> GeoDocument {
    let mut view = GeoDocument {
        metadata: doc.metadata.clone(),
        routes: pick(&doc.routes, routes),
        tracks: pick(&doc.tracks, tracks),
        waypoints: pick(&doc.waypoints, waypoints),
        bounds: None,
    };
    view.bounds = view.computed_bounds().or(doc.bounds);
    view
}

fn pick<T: Clone>(items: &[T], selected: &BTreeSet<usize>) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| selected.contains(i))
        .map(|(_, item)| item.clone())
        .collect()
}
