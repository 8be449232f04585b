//! The single live viewer: current document, selection and active map.

use log::{debug, info, warn};

use crate::bounds::bounds_of;
use crate::error::{BackendError, ParseError};
use crate::model::GeoDocument;
use crate::options::RenderOptions;
use crate::parser::parse_gpx;
use crate::render::{MapBackend, Provider};
use crate::selection::{ItemKind, Selection};
use crate::summary::DocumentSummary;

/// What the placeholder area over the map should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    Loading(Provider),
    Ready(Provider),
    Unavailable(BackendError),
}

impl MapStatus {
    /// Placeholder text; empty once the map is up.
    pub fn message(&self) -> String {
        match self {
            Self::Loading(p) => format!("Loading {p} map…"),
            Self::Ready(_) => String::new(),
            Self::Unavailable(e) => e.to_string(),
        }
    }
}

/// The page around the map: owns the container element and knows how to
/// bring a vendor SDK up.
pub trait MapHost {
    /// Drop the current map container and put a fresh, empty one in place.
    fn reset_container(&mut self);

    /// Start initialising `provider`. The outcome arrives later through
    /// [`Viewer::attach_backend`] or [`Viewer::backend_failed`] carrying
    /// the same `ticket`.
    fn request_backend(&mut self, provider: Provider, ticket: u64);

    fn report_status(&mut self, status: &MapStatus);
}

pub struct Viewer<H: MapHost> {
    host: H,
    provider: Provider,
    ticket: u64,
    backend: Option<Box<dyn MapBackend>>,
    document: Option<GeoDocument>,
    selection: Selection,
}

impl<H: MapHost> Viewer<H> {
    pub fn new(host: H, provider: Provider) -> Self {
        Self {
            host,
            provider,
            ticket: 0,
            backend: None,
            document: None,
            selection: Selection::default(),
        }
    }

    /// Request the initial backend.
    pub fn start(&mut self) {
        self.request_backend();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn document(&self) -> Option<&GeoDocument> {
        self.document.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn backend(&self) -> Option<&dyn MapBackend> {
        self.backend.as_deref()
    }

    /// The current document restricted to the live selection.
    pub fn filtered(&self) -> Option<GeoDocument> {
        self.document.as_ref().map(|doc| self.selection.apply(doc))
    }

    pub fn summary(&self) -> Option<DocumentSummary> {
        self.document.as_ref().map(DocumentSummary::new)
    }

    /// Replace the current document with the parse of `text`, select
    /// everything and draw it. On failure the current document is cleared.
    pub fn load(&mut self, text: &str) -> Result<(), ParseError> {
        match parse_gpx(text) {
            Ok(doc) => {
                info!(
                    "loaded GPX with {} routes, {} tracks, {} waypoints",
                    doc.routes.len(),
                    doc.tracks.len(),
                    doc.waypoints.len()
                );
                self.selection = Selection::all(&doc);
                self.document = Some(doc);
                self.redraw(RenderOptions { fit_bounds: true });
                Ok(())
            }
            Err(e) => {
                warn!("GPX load failed: {e}");
                self.document = None;
                self.selection = Selection::default();
                if let Some(backend) = self.backend.as_mut() {
                    backend.clear();
                }
                Err(e)
            }
        }
    }

    pub fn set_selected(&mut self, kind: ItemKind, index: usize, selected: bool) {
        if self.selection.set(kind, index, selected) {
            self.redraw(RenderOptions { fit_bounds: false });
        }
    }

    pub fn set_all_selected(&mut self, kind: ItemKind, selected: bool) {
        self.selection.set_all(kind, selected);
        self.redraw(RenderOptions { fit_bounds: false });
    }

    /// Full clear-and-redraw of the filtered view on the active backend.
    pub fn redraw(&mut self, options: RenderOptions) {
        let (Some(doc), Some(backend)) = (&self.document, self.backend.as_mut()) else {
            return;
        };
        backend.render(&self.selection.apply(doc), options);
    }

    /// Move the viewport to one item of the unfiltered document.
    pub fn pan_to_item(&mut self, kind: ItemKind, index: usize) {
        let (Some(doc), Some(backend)) = (&self.document, self.backend.as_mut()) else {
            return;
        };
        match kind {
            ItemKind::Route => {
                if let Some(b) = doc.routes.get(index).and_then(|r| bounds_of(r.points())) {
                    backend.pan_to(&b);
                }
            }
            ItemKind::Track => {
                if let Some(b) = doc.tracks.get(index).and_then(|t| bounds_of(t.points())) {
                    backend.pan_to(&b);
                }
            }
            ItemKind::Waypoint => {
                if let Some(wpt) = doc.waypoints.get(index) {
                    backend.pan_to_point(wpt.position());
                }
            }
        }
    }

    /// Tear down the active map and start bringing up `provider` in a
    /// fresh container. Returns false if `provider` is already active.
    pub fn switch_provider(&mut self, provider: Provider) -> bool {
        if provider == self.provider {
            return false;
        }
        info!("switching map provider {} -> {provider}", self.provider);
        if let Some(backend) = self.backend.take() {
            backend.dispose();
        }
        self.host.reset_container();
        self.provider = provider;
        self.request_backend();
        true
    }

    /// Whether `ticket` is the outstanding request for `provider`.
    pub fn is_current(&self, provider: Provider, ticket: u64) -> bool {
        ticket == self.ticket && provider == self.provider
    }

    /// Build and attach the backend for a finished request. `build` only
    /// runs while the request is still current, so an outdated load never
    /// creates a map in the live container.
    pub fn complete_request(
        &mut self,
        provider: Provider,
        ticket: u64,
        build: impl FnOnce() -> Result<Box<dyn MapBackend>, BackendError>,
    ) {
        if !self.is_current(provider, ticket) {
            debug!("skipping stale {provider} load (ticket {ticket})");
            return;
        }
        match build() {
            Ok(backend) => self.attach_backend(ticket, backend),
            Err(e) => self.backend_failed(ticket, e),
        }
    }

    /// Dispose the active backend and hand back the last ticket issued, for
    /// a successor viewer to continue from.
    pub fn shutdown(mut self) -> u64 {
        if let Some(backend) = self.backend.take() {
            backend.dispose();
        }
        self.ticket
    }

    /// Issue tickets after `ticket` so answers meant for a predecessor are
    /// treated as stale.
    pub fn continue_after(&mut self, ticket: u64) {
        self.ticket = self.ticket.max(ticket);
    }

    /// Install a backend that finished initialising. Backends answering an
    /// outdated request are disposed immediately.
    pub fn attach_backend(&mut self, ticket: u64, backend: Box<dyn MapBackend>) {
        if ticket != self.ticket || backend.provider() != self.provider {
            debug!("dropping stale {} backend (ticket {ticket})", backend.provider());
            backend.dispose();
            return;
        }
        if let Some(previous) = self.backend.replace(backend) {
            previous.dispose();
        }
        info!("{} map ready", self.provider);
        self.host.report_status(&MapStatus::Ready(self.provider));
        self.redraw(RenderOptions { fit_bounds: true });
    }

    /// Report a backend that could not be brought up. The document stays
    /// loaded for whichever backend succeeds next.
    pub fn backend_failed(&mut self, ticket: u64, error: BackendError) {
        if ticket != self.ticket {
            debug!("ignoring stale failure (ticket {ticket}): {error}");
            return;
        }
        warn!("{error}");
        self.host.report_status(&MapStatus::Unavailable(error));
    }

    fn request_backend(&mut self) {
        self.ticket += 1;
        self.host.report_status(&MapStatus::Loading(self.provider));
        self.host.request_backend(self.provider, self.ticket);
    }
}
