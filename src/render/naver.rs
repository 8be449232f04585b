//! Backend variant A: Naver Maps (`naver.maps`).

use log::warn;

use crate::error::BackendError;
use crate::model::{Bounds, GeoPoint};

use super::{DEFAULT_CENTER, FIT_PADDING_PX, MapBackend, Overlay, Provider, Stroke, WaypointLabel};

/// Zoom level of a freshly created map.
pub const DEFAULT_ZOOM: u8 = 10;
/// Zoom level used when centring on a single waypoint.
pub const CLOSE_UP_ZOOM: u8 = 15;

/// The part of the `naver.maps` SDK this backend drives.
pub trait NaverApi {
    type LatLng;
    type Map;
    type Overlay;

    fn lat_lng(&self, lat: f64, lng: f64) -> Self::LatLng;

    fn create_map(&self, center: Self::LatLng, zoom: u8) -> Result<Self::Map, BackendError>;

    /// `new naver.maps.Polyline({ map, path, ... })`, already attached.
    fn polyline(
        &self,
        map: &Self::Map,
        path: Vec<Self::LatLng>,
        stroke: &Stroke,
    ) -> Result<Self::Overlay, BackendError>;

    /// HTML-icon marker carrying the waypoint caption, already attached.
    fn label_marker(
        &self,
        map: &Self::Map,
        position: Self::LatLng,
        label: &WaypointLabel,
    ) -> Result<Self::Overlay, BackendError>;

    /// `overlay.setMap(null)`
    fn detach(&self, overlay: &Self::Overlay);

    fn fit_bounds(
        &self,
        map: &Self::Map,
        south_west: Self::LatLng,
        north_east: Self::LatLng,
        padding: u32,
    );

    fn set_center(&self, map: &Self::Map, center: Self::LatLng);

    fn set_zoom(&self, map: &Self::Map, zoom: u8);

    fn destroy(&self, map: Self::Map);
}

pub struct NaverBackend<A: NaverApi> {
    api: A,
    map: A::Map,
    overlays: Vec<A::Overlay>,
}

impl<A: NaverApi> NaverBackend<A> {
    /// Create the map centred on [`DEFAULT_CENTER`] at [`DEFAULT_ZOOM`].
    pub fn initialize(api: A) -> Result<Self, BackendError> {
        let center = api.lat_lng(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng);
        let map = api.create_map(center, DEFAULT_ZOOM)?;
        Ok(Self {
            api,
            map,
            overlays: Vec::new(),
        })
    }

    fn to_lat_lng(&self, p: GeoPoint) -> A::LatLng {
        self.api.lat_lng(p.lat, p.lng)
    }
}

impl<A: NaverApi> MapBackend for NaverBackend<A> {
    fn provider(&self) -> Provider {
        Provider::Naver
    }

    fn draw(&mut self, overlay: &Overlay<'_>) {
        let created = match overlay {
            Overlay::Path { points, stroke } => {
                let path = points.iter().map(|p| self.to_lat_lng(*p)).collect();
                self.api.polyline(&self.map, path, stroke)
            }
            Overlay::Waypoint { position, label } => {
                let position = self.to_lat_lng(*position);
                self.api.label_marker(&self.map, position, label)
            }
        };
        match created {
            Ok(o) => self.overlays.push(o),
            Err(e) => warn!("skipping overlay: {e}"),
        }
    }

    fn clear(&mut self) {
        for overlay in self.overlays.drain(..) {
            self.api.detach(&overlay);
        }
    }

    fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    fn pan_to(&mut self, bounds: &Bounds) {
        let sw = self.to_lat_lng(bounds.south_west());
        let ne = self.to_lat_lng(bounds.north_east());
        self.api.fit_bounds(&self.map, sw, ne, FIT_PADDING_PX);
    }

    fn pan_to_point(&mut self, point: GeoPoint) {
        let center = self.to_lat_lng(point);
        self.api.set_center(&self.map, center);
        self.api.set_zoom(&self.map, CLOSE_UP_ZOOM);
    }

    fn dispose(mut self: Box<Self>) {
        self.clear();
        let Self { api, map, .. } = *self;
        api.destroy(map);
    }
}
