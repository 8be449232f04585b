//! Backend variant B: Kakao Maps (`kakao.maps`).
//!
//! Kakao overlays are created detached and attached with `setMap`, and
//! zoom is expressed as a "level" where smaller means closer.

use log::warn;

use crate::error::BackendError;
use crate::model::{Bounds, GeoPoint};

use super::{DEFAULT_CENTER, FIT_PADDING_PX, MapBackend, Overlay, Provider, Stroke, WaypointLabel};

pub const DEFAULT_LEVEL: u8 = 5;
pub const CLOSE_UP_LEVEL: u8 = 5;

/// The part of the `kakao.maps` SDK this backend drives.
pub trait KakaoApi {
    type LatLng;
    type Map;
    type Overlay;

    fn lat_lng(&self, lat: f64, lng: f64) -> Self::LatLng;

    fn create_map(&self, center: Self::LatLng, level: u8) -> Result<Self::Map, BackendError>;

    fn polyline(
        &self,
        path: Vec<Self::LatLng>,
        stroke: &Stroke,
    ) -> Result<Self::Overlay, BackendError>;

    /// `new kakao.maps.CustomOverlay({ content, position })`
    fn custom_overlay(
        &self,
        position: Self::LatLng,
        label: &WaypointLabel,
    ) -> Result<Self::Overlay, BackendError>;

    fn set_map(&self, overlay: &Self::Overlay, map: Option<&Self::Map>);

    /// `map.setBounds(new LatLngBounds(sw, ne), padding, padding, padding, padding)`
    fn set_bounds(
        &self,
        map: &Self::Map,
        south_west: Self::LatLng,
        north_east: Self::LatLng,
        padding: u32,
    );

    fn set_center(&self, map: &Self::Map, center: Self::LatLng);

    fn set_level(&self, map: &Self::Map, level: u8);
}

pub struct KakaoBackend<A: KakaoApi> {
    api: A,
    map: A::Map,
    overlays: Vec<A::Overlay>,
}

impl<A: KakaoApi> KakaoBackend<A> {
    pub fn initialize(api: A) -> Result<Self, BackendError> {
        let center = api.lat_lng(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng);
        let map = api.create_map(center, DEFAULT_LEVEL)?;
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

impl<A: KakaoApi> MapBackend for KakaoBackend<A> {
    fn provider(&self) -> Provider {
        Provider::Kakao
    }

    fn draw(&mut self, overlay: &Overlay<'_>) {
        let created = match overlay {
            Overlay::Path { points, stroke } => {
                let path = points.iter().map(|p| self.to_lat_lng(*p)).collect();
                self.api.polyline(path, stroke)
            }
            Overlay::Waypoint { position, label } => {
                self.api.custom_overlay(self.to_lat_lng(*position), label)
            }
        };
        match created {
            Ok(o) => {
                self.api.set_map(&o, Some(&self.map));
                self.overlays.push(o);
            }
            Err(e) => warn!("skipping overlay: {e}"),
        }
    }

    fn clear(&mut self) {
        for overlay in self.overlays.drain(..) {
            self.api.set_map(&overlay, None);
        }
    }

    fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    fn pan_to(&mut self, bounds: &Bounds) {
        let sw = self.to_lat_lng(bounds.south_west());
        let ne = self.to_lat_lng(bounds.north_east());
        self.api.set_bounds(&self.map, sw, ne, FIT_PADDING_PX);
    }

    fn pan_to_point(&mut self, point: GeoPoint) {
        let center = self.to_lat_lng(point);
        self.api.set_center(&self.map, center);
        self.api.set_level(&self.map, CLOSE_UP_LEVEL);
    }

    fn dispose(mut self: Box<Self>) {
        self.clear();
    }
}
