//! Recording stand-ins for the vendor SDKs.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::BackendError;
use crate::model::{Bounds, GeoPoint};

use super::kakao::KakaoApi;
use super::naver::NaverApi;
use super::{Provider, Stroke, WaypointLabel};

#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Line {
        color: String,
        dashed: bool,
        points: usize,
    },
    Label {
        number: usize,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateMap {
        provider: Provider,
        center: GeoPoint,
        zoom: u8,
    },
    Fit {
        provider: Provider,
        bounds: Bounds,
        padding: u32,
    },
    Center {
        provider: Provider,
        point: GeoPoint,
    },
    Zoom {
        provider: Provider,
        level: u8,
    },
}

#[derive(Debug)]
struct Entry {
    provider: Provider,
    drawn: Drawn,
    attached: bool,
}

/// Shared record of everything the fakes were asked to do.
#[derive(Debug, Default)]
pub struct Ledger {
    next_id: usize,
    overlays: BTreeMap<usize, Entry>,
    pub calls: Vec<Call>,
    pub maps_alive: usize,
    pub fail_create: bool,
}

impl Ledger {
    pub fn shared() -> Rc<RefCell<Ledger>> {
        Rc::new(RefCell::new(Ledger::default()))
    }

    /// Overlays currently on a map, in creation order.
    pub fn live(&self, provider: Provider) -> Vec<Drawn> {
        self.overlays
            .values()
            .filter(|e| e.provider == provider && e.attached)
            .map(|e| e.drawn.clone())
            .collect()
    }

    fn add(&mut self, provider: Provider, drawn: Drawn, attached: bool) -> usize {
        self.next_id += 1;
        self.overlays.insert(
            self.next_id,
            Entry {
                provider,
                drawn,
                attached,
            },
        );
        self.next_id
    }

    fn attach(&mut self, id: usize, attached: bool) {
        if let Some(entry) = self.overlays.get_mut(&id) {
            entry.attached = attached;
        }
    }

    fn create_map(
        &mut self,
        provider: Provider,
        center: GeoPoint,
        zoom: u8,
    ) -> Result<usize, BackendError> {
        if self.fail_create {
            return Err(BackendError::Sdk {
                provider,
                message: "no maps available".to_string(),
            });
        }
        self.calls.push(Call::CreateMap {
            provider,
            center,
            zoom,
        });
        self.maps_alive += 1;
        self.next_id += 1;
        Ok(self.next_id)
    }
}

fn line(stroke: &Stroke, points: usize) -> Drawn {
    Drawn::Line {
        color: stroke.color.to_string(),
        dashed: stroke.dashed,
        points,
    }
}

fn label(label: &WaypointLabel) -> Drawn {
    Drawn::Label {
        number: label.number,
        text: label.text.clone(),
    }
}

fn bounds(sw: GeoPoint, ne: GeoPoint) -> Bounds {
    Bounds {
        min_lat: sw.lat,
        min_lng: sw.lng,
        max_lat: ne.lat,
        max_lng: ne.lng,
    }
}

pub struct FakeNaver {
    ledger: Rc<RefCell<Ledger>>,
}

impl FakeNaver {
    pub fn new(ledger: &Rc<RefCell<Ledger>>) -> Self {
        Self {
            ledger: Rc::clone(ledger),
        }
    }
}

impl NaverApi for FakeNaver {
    type LatLng = GeoPoint;
    type Map = usize;
    type Overlay = usize;

    fn lat_lng(&self, lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn create_map(&self, center: GeoPoint, zoom: u8) -> Result<usize, BackendError> {
        self.ledger
            .borrow_mut()
            .create_map(Provider::Naver, center, zoom)
    }

    fn polyline(
        &self,
        _map: &usize,
        path: Vec<GeoPoint>,
        stroke: &Stroke,
    ) -> Result<usize, BackendError> {
        Ok(self
            .ledger
            .borrow_mut()
            .add(Provider::Naver, line(stroke, path.len()), true))
    }

    fn label_marker(
        &self,
        _map: &usize,
        _position: GeoPoint,
        caption: &WaypointLabel,
    ) -> Result<usize, BackendError> {
        Ok(self
            .ledger
            .borrow_mut()
            .add(Provider::Naver, label(caption), true))
    }

    fn detach(&self, overlay: &usize) {
        self.ledger.borrow_mut().attach(*overlay, false);
    }

    fn fit_bounds(&self, _map: &usize, south_west: GeoPoint, north_east: GeoPoint, padding: u32) {
        self.ledger.borrow_mut().calls.push(Call::Fit {
            provider: Provider::Naver,
            bounds: bounds(south_west, north_east),
            padding,
        });
    }

    fn set_center(&self, _map: &usize, center: GeoPoint) {
        self.ledger.borrow_mut().calls.push(Call::Center {
            provider: Provider::Naver,
            point: center,
        });
    }

    fn set_zoom(&self, _map: &usize, zoom: u8) {
        self.ledger.borrow_mut().calls.push(Call::Zoom {
            provider: Provider::Naver,
            level: zoom,
        });
    }

    fn destroy(&self, _map: usize) {
        self.ledger.borrow_mut().maps_alive -= 1;
    }
}

pub struct FakeKakao {
    ledger: Rc<RefCell<Ledger>>,
}

impl FakeKakao {
    pub fn new(ledger: &Rc<RefCell<Ledger>>) -> Self {
        Self {
            ledger: Rc::clone(ledger),
        }
    }
}

impl KakaoApi for FakeKakao {
    type LatLng = GeoPoint;
    type Map = usize;
    type Overlay = usize;

    fn lat_lng(&self, lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn create_map(&self, center: GeoPoint, level: u8) -> Result<usize, BackendError> {
        self.ledger
            .borrow_mut()
            .create_map(Provider::Kakao, center, level)
    }

    fn polyline(&self, path: Vec<GeoPoint>, stroke: &Stroke) -> Result<usize, BackendError> {
        Ok(self
            .ledger
            .borrow_mut()
            .add(Provider::Kakao, line(stroke, path.len()), false))
    }

    fn custom_overlay(
        &self,
        _position: GeoPoint,
        caption: &WaypointLabel,
    ) -> Result<usize, BackendError> {
        Ok(self
            .ledger
            .borrow_mut()
            .add(Provider::Kakao, label(caption), false))
    }

    fn set_map(&self, overlay: &usize, map: Option<&usize>) {
        self.ledger.borrow_mut().attach(*overlay, map.is_some());
    }

    fn set_bounds(&self, _map: &usize, south_west: GeoPoint, north_east: GeoPoint, padding: u32) {
        self.ledger.borrow_mut().calls.push(Call::Fit {
            provider: Provider::Kakao,
            bounds: bounds(south_west, north_east),
            padding,
        });
    }

    fn set_center(&self, _map: &usize, center: GeoPoint) {
        self.ledger.borrow_mut().calls.push(Call::Center {
            provider: Provider::Kakao,
            point: center,
        });
    }

    fn set_level(&self, _map: &usize, level: u8) {
        self.ledger.borrow_mut().calls.push(Call::Zoom {
            provider: Provider::Kakao,
            level,
        });
    }
}
