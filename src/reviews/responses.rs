use crate::proximity::policy::{LocationCheck, PhotoLocation};
use crate::reviews::models::ReviewSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoCheckResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ReviewError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_location: Option<PhotoLocation>,
    /// Explanation shown to the user when the photo was taken elsewhere or was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ReviewError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_location: Option<PhotoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewSummary>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ReviewError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewSummary>>,
}

/// All possible reasons why a photo or a review may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewError {
    PlaceNotFound,
    InvalidUpload,
    MissingPhoto,
    MissingTravelType,
    UnsupportedFormat,
    InvalidImage,
    LocationNotVerified,
}

impl PhotoCheckResponse {
    pub fn rejected(error_code: ReviewError, message: Option<String>) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            photo_location: None,
            message,
        }
    }
}

impl SubmitReviewResponse {
    pub fn rejected(error_code: ReviewError, message: Option<String>) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            message,
            photo_location: None,
            location: None,
            review: None,
        }
    }
}
