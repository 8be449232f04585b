//! Provider-agnostic drawing of a [`GeoDocument`] onto a vendor map.
//!
//! [`plan`] decides *what* goes on the map (order, colours, labels, the fit
//! target); each backend only translates those overlays into its vendor's
//! primitives and owns the overlay objects it created.

pub mod kakao;
pub mod naver;
mod palette;
mod plan;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Bounds, GeoDocument, GeoPoint};
use crate::options::RenderOptions;

pub use palette::{ROUTE_COLORS, TRACK_COLORS, route_color, track_color};
pub use plan::{Overlay, Stroke, WaypointLabel, fit_target, plan};

/// Where every freshly initialised map is centred (Seoul City Hall).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 37.5665,
    lng: 126.978,
};

/// Padding in pixels applied on every side when fitting bounds.
pub const FIT_PADDING_PX: u32 = 40;

pub const STROKE_WEIGHT: u32 = 4;
pub const STROKE_OPACITY: f64 = 1.0;

/// Vendor stroke style name used for track polylines.
pub const DASH_STYLE: &str = "shortdash";

/// The map engines a viewer can switch between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Naver,
    Kakao,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naver => f.write_str("Naver"),
            Self::Kakao => f.write_str("Kakao"),
        }
    }
}

/// A live map instance together with every overlay it has drawn.
///
/// Implementations only ever touch overlays they created themselves, so
/// clearing one backend can never remove another backend's drawings.
pub trait MapBackend {
    fn provider(&self) -> Provider;

    /// Put a single planned overlay on the map and take ownership of it.
    fn draw(&mut self, overlay: &Overlay<'_>);

    /// Remove every overlay this backend owns.
    fn clear(&mut self);

    fn overlay_count(&self) -> usize;

    /// Fit the viewport to `bounds` with [`FIT_PADDING_PX`]. Overlays stay.
    fn pan_to(&mut self, bounds: &Bounds);

    /// Centre on `point` at the backend's close-up zoom. Overlays stay.
    fn pan_to_point(&mut self, point: GeoPoint);

    /// Remove all overlays and release the vendor map instance.
    fn dispose(self: Box<Self>);

    /// Clear, then draw routes, tracks and waypoints in that order, then
    /// optionally fit the viewport.
    fn render(&mut self, doc: &GeoDocument, options: RenderOptions) {
        self.clear();
        let overlays = plan(doc);
        for overlay in &overlays {
            self.draw(overlay);
        }
        if let Some(bounds) = fit_target(doc, &overlays, options) {
            self.pan_to(&bounds);
        }
    }
}
