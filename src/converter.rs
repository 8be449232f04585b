use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::model::*;
use crate::render::{route_color, track_color};

/// GeoJSON view of a (typically filtered) document.
///
/// Routes and track segments become LineStrings, or Points when they hold a
/// single coordinate; pathless ones are skipped. Waypoints become Points.
/// Colours match what the map backends draw.
pub fn to_feature_collection(doc: &GeoDocument) -> FeatureCollection {
    let mut features = Vec::new();

    for (i, rte) in doc.routes.iter().enumerate() {
        if let Some(geometry) = path_geometry(&rte.points) {
            let mut props = base_props("route", i, &rte.name);
            props.insert("color".to_string(), route_color(i).into());
            features.push(feature(geometry, props));
        }
    }

    for (i, trk) in doc.tracks.iter().enumerate() {
        for (s, seg) in trk.segments.iter().enumerate() {
            if let Some(geometry) = path_geometry(&seg.points) {
                let mut props = base_props("track", i, &trk.name);
                props.insert("segment".to_string(), s.into());
                props.insert("color".to_string(), track_color(i).into());
                features.push(feature(geometry, props));
            }
        }
    }

    for (i, wpt) in doc.waypoints.iter().enumerate() {
        let coords = match wpt.elevation {
            Some(ele) => vec![wpt.lng, wpt.lat, ele],
            None => vec![wpt.lng, wpt.lat],
        };
        let mut props = base_props("waypoint", i, &wpt.name);
        if !wpt.desc.is_empty() {
            props.insert("desc".to_string(), wpt.desc.clone().into());
        }
        if let Some(ele) = wpt.elevation.and_then(serde_json::Number::from_f64) {
            props.insert("ele".to_string(), JsonValue::Number(ele));
        }
        features.push(feature(Geometry::new(Value::Point(coords)), props));
    }

    FeatureCollection {
        bbox: doc
            .bounds
            .map(|b| vec![b.min_lng, b.min_lat, b.max_lng, b.max_lat]),
        features,
        foreign_members: None,
    }
}

fn path_geometry(points: &[GeoPoint]) -> Option<Geometry> {
    let value = match points {
        [] => return None,
        [p] => Value::Point(vec![p.lng, p.lat]),
        _ => Value::LineString(points.iter().map(|p| vec![p.lng, p.lat]).collect()),
    };
    Some(Geometry::new(value))
}

fn base_props(gpx_type: &str, index: usize, name: &str) -> Map<String, JsonValue> {
    let mut props = Map::new();
    props.insert("gpxType".to_string(), gpx_type.into());
    props.insert("index".to_string(), index.into());
    if !name.is_empty() {
        props.insert("name".to_string(), name.into());
    }
    props
}

fn feature(geometry: Geometry, props: Map<String, JsonValue>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}
