use serde::Serialize;

use crate::model::{Bounds, GeoDocument, Metadata};
use crate::render::{route_color, track_color};

/// Everything the sidebar tables show for a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub metadata: Metadata,
    pub bounds: Option<Bounds>,
    pub routes: Vec<PathSummary>,
    pub tracks: Vec<PathSummary>,
    pub waypoints: Vec<WaypointSummary>,
}

/// One row of the route or track table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub index: usize,
    pub number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: &'static str,
    pub dashed: bool,
    pub point_count: usize,
}

/// One row of the waypoint table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointSummary {
    pub index: usize,
    pub number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

impl DocumentSummary {
    pub fn new(doc: &GeoDocument) -> Self {
        let routes = doc
            .routes
            .iter()
            .enumerate()
            .map(|(i, r)| PathSummary {
                index: i,
                number: i + 1,
                name: non_empty(&r.name),
                color: route_color(i),
                dashed: false,
                point_count: r.points.len(),
            })
            .collect();
        let tracks = doc
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| PathSummary {
                index: i,
                number: i + 1,
                name: non_empty(&t.name),
                color: track_color(i),
                dashed: true,
                point_count: t.point_count(),
            })
            .collect();
        let waypoints = doc
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| WaypointSummary {
                index: i,
                number: i + 1,
                label: w.label().map(str::to_string),
                lat: w.lat,
                lng: w.lng,
            })
            .collect();

        Self {
            metadata: doc.metadata.clone(),
            bounds: doc.bounds,
            routes,
            tracks,
            waypoints,
        }
    }
}
