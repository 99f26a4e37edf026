use crate::cli::Args;
use crate::geo::consts::BALI;
use crate::geo::models::{Coordinate, Region};
use crate::geo::{format_distance, planar_distance};
use crate::photos::gps::GpsExtractionError;
use crate::places::models::Place;
use crate::proximity::{evaluate, IndeterminateReason, ProximityResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the client's geolocation API reported for the current device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceLocation {
    Position(Coordinate),
    Error(GeolocationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl FromStr for GeolocationError {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unsupported" => Ok(Self::Unsupported),
            "permissionDenied" => Ok(Self::PermissionDenied),
            "positionUnavailable" => Ok(Self::PositionUnavailable),
            "timeout" => Ok(Self::Timeout),
            _ => Err(()),
        }
    }
}

/// Outcome of looking at the GPS tags of an uploaded photo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PhotoLocation {
    Found {
        coordinate: Coordinate,
        /// Meters to the place.
        distance: f64,
    },
    Mismatch {
        coordinate: Coordinate,
        /// Meters to the place.
        distance: f64,
    },
    Missing {
        reason: IndeterminateReason,
    },
}

impl PhotoLocation {
    pub fn mismatch_message(&self, place_name: &str) -> Option<String> {
        match self {
            PhotoLocation::Mismatch { distance, .. } => Some(format!(
                "This photo was taken {} away from {}. Please upload a photo taken at this place, \
                 or proceed without photo GPS verification.",
                format_distance(*distance),
                place_name,
            )),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationEvidence {
    Photo,
    Device,
    Region,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LocationCheck {
    Verified {
        via: LocationEvidence,
        coordinate: Coordinate,
        /// Meters to the place.
        distance: f64,
    },
    Failed {
        reason: LocationFailure,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LocationFailure {
    TooFar {
        /// Meters to the place.
        distance: f64,
    },
    InvalidReading,
    Geolocation {
        error: GeolocationError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerificationPolicy {
    pub photo_radius_m: f64,
    pub device_radius_m: f64,
    /// Readings inside this region pass regardless of the distance to the place.
    pub fallback_region: Option<Region>,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            photo_radius_m: 500.0,
            device_radius_m: 100.0,
            fallback_region: Some(BALI),
        }
    }
}

impl VerificationPolicy {
    pub fn from_args(args: &Args) -> Self {
        Self {
            photo_radius_m: args.photo_radius_m,
            device_radius_m: args.device_radius_m,
            fallback_region: (!args.disable_region_fallback).then_some(BALI),
        }
    }

    pub fn check_photo(
        &self,
        photo_gps: Result<Coordinate, GpsExtractionError>,
        place: &Place,
    ) -> PhotoLocation {
        let coordinate = match photo_gps {
            Ok(coordinate) => coordinate,
            Err(err) => {
                tracing::debug!(place_id = place.id, %err, "No usable GPS in the photo.");
                return PhotoLocation::Missing {
                    reason: IndeterminateReason::from(&err),
                };
            }
        };
        let distance = planar_distance(coordinate, place.coordinate);
        match evaluate(coordinate, place, self.photo_radius_m) {
            ProximityResult::Verified => PhotoLocation::Found {
                coordinate,
                distance,
            },
            ProximityResult::Failed => PhotoLocation::Mismatch {
                coordinate,
                distance,
            },
            ProximityResult::Indeterminate(reason) => PhotoLocation::Missing { reason },
        }
    }

    pub fn check_device(&self, device: DeviceLocation, place: &Place) -> LocationCheck {
        let coordinate = match device {
            DeviceLocation::Position(coordinate) => coordinate,
            DeviceLocation::Error(error) => {
                return LocationCheck::Failed {
                    reason: LocationFailure::Geolocation { error },
                }
            }
        };
        let distance = planar_distance(coordinate, place.coordinate);
        match evaluate(coordinate, place, self.device_radius_m) {
            ProximityResult::Verified => LocationCheck::Verified {
                via: LocationEvidence::Device,
                coordinate,
                distance,
            },
            ProximityResult::Indeterminate(_) => LocationCheck::Failed {
                reason: LocationFailure::InvalidReading,
            },
            ProximityResult::Failed => match self.fallback_region {
                Some(region) if region.contains(coordinate) => LocationCheck::Verified {
                    via: LocationEvidence::Region,
                    coordinate,
                    distance,
                },
                _ => LocationCheck::Failed {
                    reason: LocationFailure::TooFar { distance },
                },
            },
        }
    }

    /// A photo taken near the place wins outright; anything else falls back to the device.
    pub fn verify_presence(
        &self,
        photo: PhotoLocation,
        device: DeviceLocation,
        place: &Place,
    ) -> LocationCheck {
        match photo {
            PhotoLocation::Found {
                coordinate,
                distance,
            } => {
                return LocationCheck::Verified {
                    via: LocationEvidence::Photo,
                    coordinate,
                    distance,
                }
            }
            PhotoLocation::Mismatch { distance, .. } => tracing::info!(
                place_id = place.id,
                distance,
                "Photo was taken too far away, checking the device location instead."
            ),
            PhotoLocation::Missing { reason } => tracing::info!(
                place_id = place.id,
                ?reason,
                "No GPS in the photo, checking the device location instead."
            ),
        }
        self.check_device(device, place)
    }

    pub fn failure_message(&self) -> String {
        format!(
            "We couldn't verify your location at this place. Please make sure you're within {} \
             of the property or upload a photo taken at the location.",
            format_distance(self.device_radius_m),
        )
    }
}
