use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PinCategory {
    Safe,
    Recommend,
    Caution,
    Avoid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub category: PinCategory,
    pub rating: f64,
    pub description: String,
    pub reports: u64,
}

/// Where a pin lands on the mock map, in percent of its width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub left: f64,
    pub top: f64,
}

impl MapPin {
    pub fn screen_position(&self) -> ScreenPosition {
        ScreenPosition {
            left: ((self.lng + 74.1) * 200.0) % 100.0,
            top: ((self.lat - 40.7) * 400.0) % 100.0,
        }
    }
}
