use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Axis-aligned box in degrees. Bounds are exclusive on every side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Region {
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.lat > self.min_lat
            && coordinate.lat < self.max_lat
            && coordinate.lng > self.min_lng
            && coordinate.lng < self.max_lng
    }
}
