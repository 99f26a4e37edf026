use crate::geo::models::Coordinate;
use crate::geo::planar_distance;
use crate::photos::gps::GpsExtractionError;
use crate::places::models::Place;
use serde::{Deserialize, Serialize};

pub mod policy;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProximityResult {
    Verified,
    Failed,
    Indeterminate(IndeterminateReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndeterminateReason {
    NoGpsMetadata,
    MissingGpsTags,
    MalformedGps,
    NonFiniteCoordinate,
}

impl From<&GpsExtractionError> for IndeterminateReason {
    fn from(err: &GpsExtractionError) -> Self {
        match err {
            GpsExtractionError::NoMetadata => IndeterminateReason::NoGpsMetadata,
            GpsExtractionError::MissingTag(_) => IndeterminateReason::MissingGpsTags,
            GpsExtractionError::MalformedDms(_) | GpsExtractionError::MalformedRef(_) => {
                IndeterminateReason::MalformedGps
            }
        }
    }
}

/// Decides whether `candidate` lies strictly closer than `threshold_m` meters to `place`.
///
/// The boundary itself is excluded, and a threshold that isn't a finite positive number never
/// verifies.
pub fn evaluate(candidate: Coordinate, place: &Place, threshold_m: f64) -> ProximityResult {
    if !candidate.is_finite() || !place.coordinate.is_finite() {
        return ProximityResult::Indeterminate(IndeterminateReason::NonFiniteCoordinate);
    }
    if !threshold_m.is_finite() || threshold_m <= 0.0 {
        return ProximityResult::Failed;
    }
    if planar_distance(candidate, place.coordinate) < threshold_m {
        ProximityResult::Verified
    } else {
        ProximityResult::Failed
    }
}
