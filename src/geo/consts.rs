use crate::geo::models::Region;

/// Rough length of one degree, applied to latitude and longitude alike.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

pub const BALI: Region = Region {
    min_lat: -9.0,
    max_lat: -8.0,
    min_lng: 115.0,
    max_lng: 116.0,
};
