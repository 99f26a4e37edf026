use crate::geo::consts::BALI;
use crate::geo::models::Coordinate;
use crate::geo::{format_distance, planar_distance};

const TOLERANCE: f64 = 1e-6;

#[test]
fn test_distance_to_itself_is_zero() {
    let point = Coordinate::new(-8.6480, 115.1379);

    assert_eq!(planar_distance(point, point), 0.0);
}

#[test]
fn test_distance_matches_precomputed_values() {
    // 3-4-5 triangle in thousandths of a degree.
    let a = Coordinate::new(10.0, 20.0);
    let b = Coordinate::new(10.003, 20.004);
    assert!((planar_distance(a, b) - 555.0).abs() < TOLERANCE);

    // One full degree of latitude.
    let a = Coordinate::new(0.0, 0.0);
    let b = Coordinate::new(1.0, 0.0);
    assert!((planar_distance(a, b) - 111_000.0).abs() < TOLERANCE);
}

#[test]
fn test_distance_is_symmetric() {
    let a = Coordinate::new(40.7128, -74.0060);
    let b = Coordinate::new(40.7589, -73.9851);

    assert_eq!(planar_distance(a, b), planar_distance(b, a));
}

#[test]
fn test_longitude_is_not_scaled_by_latitude() {
    let equator = planar_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01));
    let arctic = planar_distance(Coordinate::new(70.0, 0.0), Coordinate::new(70.0, 0.01));

    assert!((equator - arctic).abs() < TOLERANCE);
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(0.0), "0m");
    assert_eq!(format_distance(742.4), "742m");
    assert_eq!(format_distance(1000.0), "1.0km");
    assert_eq!(format_distance(12_345.0), "12.3km");
}

#[test]
fn test_region_bounds_are_exclusive() {
    assert!(BALI.contains(Coordinate::new(-8.6480, 115.1379)));
    assert!(!BALI.contains(Coordinate::new(-8.0, 115.5)));
    assert!(!BALI.contains(Coordinate::new(-8.5, 116.0)));
    assert!(!BALI.contains(Coordinate::new(40.7128, -74.0060)));
}
