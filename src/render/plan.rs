use crate::model::{Bounds, GeoDocument, GeoPoint};
use crate::options::RenderOptions;

use super::palette::{route_color, track_color};
use super::{STROKE_OPACITY, STROKE_WEIGHT};

/// One thing to draw, in vendor-neutral terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<'a> {
    Path {
        points: &'a [GeoPoint],
        stroke: Stroke,
    },
    Waypoint {
        position: GeoPoint,
        label: WaypointLabel,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub dashed: bool,
}

impl Stroke {
    fn route(index: usize) -> Self {
        Self {
            color: route_color(index),
            weight: STROKE_WEIGHT,
            opacity: STROKE_OPACITY,
            dashed: false,
        }
    }

    fn track(index: usize) -> Self {
        Self {
            color: track_color(index),
            weight: STROKE_WEIGHT,
            opacity: STROKE_OPACITY,
            dashed: true,
        }
    }
}

/// Marker caption: 1-based sequence number plus name or description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointLabel {
    pub number: usize,
    pub text: String,
}

/// Overlays for `doc` in stacking order: routes, track segments, waypoints.
///
/// Pathless routes and segments are skipped. Track segments share the
/// colour of their track.
pub fn plan(doc: &GeoDocument) -> Vec<Overlay<'_>> {
    let routes = doc
        .routes
        .iter()
        .enumerate()
        .filter(|(_, route)| !route.points.is_empty())
        .map(|(i, route)| Overlay::Path {
            points: &route.points,
            stroke: Stroke::route(i),
        });

    let tracks = doc.tracks.iter().enumerate().flat_map(|(i, track)| {
        track
            .segments
            .iter()
            .filter(|seg| !seg.points.is_empty())
            .map(move |seg| Overlay::Path {
                points: &seg.points,
                stroke: Stroke::track(i),
            })
    });

    let waypoints = doc.waypoints.iter().enumerate().map(|(i, wpt)| Overlay::Waypoint {
        position: wpt.position(),
        label: WaypointLabel {
            number: i + 1,
            text: wpt.label().unwrap_or_default().to_string(),
        },
    });

    routes.chain(tracks).chain(waypoints).collect()
}

/// Bounds to fit after drawing, if the viewport should move at all.
pub fn fit_target(
    doc: &GeoDocument,
    drawn: &[Overlay<'_>],
    options: RenderOptions,
) -> Option<Bounds> {
    if options.fit_bounds && !drawn.is_empty() {
        doc.bounds
    } else {
        None
    }
}
