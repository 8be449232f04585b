use serde::{Deserialize, Serialize};

/// A parsed GPX file: everything the map and the sidebar need.
///
/// Created once per successful parse and never mutated afterwards; the
/// filtered view is always derived into a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoDocument {
    pub metadata: Metadata,
    pub routes: Vec<Route>,
    pub tracks: Vec<Track>,
    pub waypoints: Vec<Waypoint>,
    pub bounds: Option<Bounds>,
}

/// A single coordinate pair. No range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A GPX route (<rte>).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub points: Vec<GeoPoint>,
}

/// A GPX track (<trk>). Each segment is drawn as its own polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub segments: Vec<Segment>,
}

/// A GPX track segment (<trkseg>).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub points: Vec<GeoPoint>,
}

/// A GPX waypoint (<wpt>).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub desc: String,
    #[serde(rename = "ele", default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl Waypoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            name: String::new(),
            desc: String::new(),
            elevation: None,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Name, falling back to the description. `None` when both are empty.
    pub fn label(&self) -> Option<&str> {
        [self.name.as_str(), self.desc.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}

/// Axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Degenerate bounds around a single point.
    pub fn from_point(p: GeoPoint) -> Self {
        Self {
            min_lat: p.lat,
            min_lng: p.lng,
            max_lat: p.lat,
            max_lng: p.lng,
        }
    }

    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lng)
    }

    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lng)
    }

    /// Grow to include `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.min_lat = self.min_lat.min(p.lat);
        self.min_lng = self.min_lng.min(p.lng);
        self.max_lat = self.max_lat.max(p.lat);
        self.max_lng = self.max_lng.max(p.lng);
    }
}

/// The <metadata> block. `author` and `bounds` are only present when the
/// file declared them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}
