use serde::{Deserialize, Serialize};

/// Meters in one foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// A WGS84 point, as produced by geocoding and consumed by nearby search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Renders the point as the `lat,lng` pair directory APIs take in query
    /// strings.
    #[must_use]
    pub fn as_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// A search radius in whichever unit the caller supplied.
///
/// Directory APIs take meters; [`Radius::to_meters`] is the single place
/// unit conversion happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    Feet(f64),
    Miles(f64),
    Meters(f64),
}

impl Radius {
    #[must_use]
    pub fn to_meters(self) -> f64 {
        match self {
            Radius::Feet(feet) => feet * METERS_PER_FOOT,
            Radius::Miles(miles) => miles * METERS_PER_MILE,
            Radius::Meters(meters) => meters,
        }
    }
}
