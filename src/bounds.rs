use crate::model::*;

/// Componentwise min/max over `points`. `None` for an empty input.
pub fn bounds_of<I>(points: I) -> Option<Bounds>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut iter = points.into_iter();
    let mut bounds = Bounds::from_point(iter.next()?);
    for p in iter {
        bounds.extend(p);
    }
    Some(bounds)
}

impl Route {
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.points.iter().copied()
    }
}

impl Track {
    /// Every point of every segment, in document order.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.segments.iter().flat_map(|s| s.points.iter().copied())
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

impl GeoDocument {
    /// Route points, then track points, then waypoint positions.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.routes
            .iter()
            .flat_map(Route::points)
            .chain(self.tracks.iter().flat_map(Track::points))
            .chain(self.waypoints.iter().map(Waypoint::position))
    }

    /// Bounds computed from the points actually present, ignoring any
    /// declared metadata bounds.
    pub fn computed_bounds(&self) -> Option<Bounds> {
        bounds_of(self.points())
    }

    pub fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }
}
