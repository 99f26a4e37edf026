use crate::hoodmap::models::{MapPin, ScreenPosition};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinsResponse {
    pub error: bool,
    pub pins: Vec<PlacedPin>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPin {
    #[serde(flatten)]
    pub pin: MapPin,
    pub position: ScreenPosition,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinStatsResponse {
    pub safe: usize,
    pub recommended: usize,
    pub caution: usize,
    pub avoid: usize,
    pub total_reports: u64,
}
