use crate::geo::models::Coordinate;
use crate::proximity::policy::LocationEvidence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TravelType {
    Solo,
    Group,
    Mixed,
}

impl FromStr for TravelType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "solo" => Ok(Self::Solo),
            "group" => Ok(Self::Group),
            "mixed" => Ok(Self::Mixed),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Review {
    pub id: Uuid,
    pub place_id: u64,
    pub travel_type: TravelType,
    pub verified_via: LocationEvidence,
    /// Where the reviewer was proven to be, not the place itself.
    pub location: Coordinate,
    /// PNG thumbnail of the uploaded photo.
    pub preview: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub id: Uuid,
    pub place_id: u64,
    pub travel_type: TravelType,
    pub verified_via: LocationEvidence,
    pub location: Coordinate,
    pub preview_url: String,
}

impl From<&Review> for ReviewSummary {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            place_id: review.place_id,
            travel_type: review.travel_type,
            verified_via: review.verified_via,
            location: review.location,
            preview_url: format!("/previews/{}", review.id),
        }
    }
}
