use consts::METERS_PER_DEGREE;
use models::Coordinate;

pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

/// Flat-earth approximation: Euclidean distance over raw degree differences.
///
/// Longitude degrees are not scaled by latitude, so this is only meaningful for short distances
/// away from the poles. Use it where a coarse "is it nearby" answer is enough.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let delta_lat = a.lat - b.lat;
    let delta_lng = a.lng - b.lng;
    (delta_lat.powi(2) + delta_lng.powi(2)).sqrt() * METERS_PER_DEGREE
}

/// Human-readable distance: meters below one kilometer, kilometers with one decimal otherwise.
pub fn format_distance(distance_m: f64) -> String {
    if distance_m < 1000.0 {
        format!("{:.0}m", distance_m)
    } else {
        format!("{:.1}km", distance_m / 1000.0)
    }
}
