use geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that the point is a usable coordinate and wraps the longitude into `[-180, 180)`.
    ///
    /// The guess map jumps between world copies, so clicks may report longitudes such as `190`
    /// or `-540`; those are the same meridians as `-170` and `180`.
    pub fn normalized(self) -> Option<Self> {
        if !self.lat.is_finite() || !self.lng.is_finite() || self.lat.abs() > 90.0 {
            return None;
        }
        let lng = (self.lng + 180.0).rem_euclid(360.0) - 180.0;
        Some(Self { lat: self.lat, lng })
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl From<LatLng> for Point<f64> {
    fn from(location: LatLng) -> Self {
        Point::new(location.lng, location.lat)
    }
}
