use crate::hoodmap::models::{MapPin, PinCategory};
use std::sync::LazyLock;

pub static PINS: LazyLock<Vec<MapPin>> = LazyLock::new(|| {
    vec![
        pin(
            1,
            (40.7128, -74.0060),
            "Washington Square Park",
            PinCategory::Safe,
            4.5,
            "Well-lit area, good for evening walks",
            12,
        ),
        pin(
            2,
            (40.7589, -73.9851),
            "Central Park East",
            PinCategory::Recommend,
            4.8,
            "Great for morning runs, active community",
            28,
        ),
        pin(
            3,
            (40.7505, -73.9934),
            "Times Square Area",
            PinCategory::Caution,
            3.2,
            "Crowded, watch belongings",
            45,
        ),
        pin(
            4,
            (40.7282, -73.7949),
            "Flushing Meadows",
            PinCategory::Safe,
            4.3,
            "Family-friendly, well-maintained",
            8,
        ),
        pin(
            5,
            (40.6892, -74.0445),
            "Brooklyn Bridge Park",
            PinCategory::Recommend,
            4.7,
            "Beautiful views, safe for solo visits",
            22,
        ),
    ]
});

fn pin(
    id: u64,
    (lat, lng): (f64, f64),
    title: &str,
    category: PinCategory,
    rating: f64,
    description: &str,
    reports: u64,
) -> MapPin {
    MapPin {
        id,
        lat,
        lng,
        title: title.to_string(),
        category,
        rating,
        description: description.to_string(),
        reports,
    }
}
