use crate::app_context::AppContext;
use crate::photos::consts::{PREVIEW_IMAGE_HEIGHT, PREVIEW_IMAGE_WIDTH};
use crate::photos::img::ImageError;
use crate::photos::{gps, img};
use crate::places::models::Place;
use crate::proximity::policy::{LocationCheck, PhotoLocation};
use crate::reviews::consts::UNSUPPORTED_FORMAT_MESSAGE;
use crate::reviews::models::{Review, ReviewSummary};
use crate::reviews::requests::ReviewUpload;
use crate::reviews::responses::{
    PhotoCheckResponse, ReviewError, ReviewsResponse, SubmitReviewResponse,
};
use crate::storage::interface::IReviewStorage;
use axum::body::Bytes;
use uuid::Uuid;

pub struct ReviewHttpHandler<RS: IReviewStorage> {
    app_context: AppContext<RS>,
    place_id: u64,
}

impl<RS> ReviewHttpHandler<RS>
where
    RS: IReviewStorage,
{
    pub fn new(app_context: AppContext<RS>, place_id: u64) -> Self {
        Self {
            app_context,
            place_id,
        }
    }

    fn place(&self) -> Option<&Place> {
        self.app_context.places.get(self.place_id)
    }

    fn locate_photo(&self, photo: &[u8], place: &Place) -> PhotoLocation {
        self.app_context
            .policy
            .check_photo(gps::extract_gps(photo), place)
    }

    pub async fn photo_check(&self, upload: ReviewUpload) -> PhotoCheckResponse {
        let Some(place) = self.place() else {
            return PhotoCheckResponse::rejected(ReviewError::PlaceNotFound, None);
        };
        let Some(photo) = upload.photo else {
            return PhotoCheckResponse::rejected(ReviewError::MissingPhoto, None);
        };
        if img::supported_format(&photo).is_err() {
            return PhotoCheckResponse::rejected(
                ReviewError::UnsupportedFormat,
                Some(String::from(UNSUPPORTED_FORMAT_MESSAGE)),
            );
        }

        let photo_location = self.locate_photo(&photo, place);
        PhotoCheckResponse {
            error: false,
            error_code: None,
            message: photo_location.mismatch_message(&place.name),
            photo_location: Some(photo_location),
        }
    }

    pub async fn submit(&self, upload: ReviewUpload) -> SubmitReviewResponse {
        let Some(place) = self.place() else {
            return SubmitReviewResponse::rejected(ReviewError::PlaceNotFound, None);
        };
        let device = match upload.device_location() {
            Ok(device) => device,
            Err(err) => {
                return SubmitReviewResponse::rejected(
                    ReviewError::InvalidUpload,
                    Some(err.to_string()),
                )
            }
        };
        let Some(photo) = upload.photo else {
            return SubmitReviewResponse::rejected(ReviewError::MissingPhoto, None);
        };
        let Some(travel_type) = upload.travel_type else {
            return SubmitReviewResponse::rejected(ReviewError::MissingTravelType, None);
        };
        if img::supported_format(&photo).is_err() {
            return SubmitReviewResponse::rejected(
                ReviewError::UnsupportedFormat,
                Some(String::from(UNSUPPORTED_FORMAT_MESSAGE)),
            );
        }

        let policy = self.app_context.policy;
        let photo_location = self.locate_photo(&photo, place);
        let location = policy.verify_presence(photo_location, device, place);
        let (verified_via, coordinate) = match location {
            LocationCheck::Verified {
                via, coordinate, ..
            } => (via, coordinate),
            LocationCheck::Failed { reason } => {
                tracing::info!(place_id = place.id, ?reason, "Location verification failed.");
                return SubmitReviewResponse {
                    error: true,
                    error_code: Some(ReviewError::LocationNotVerified),
                    message: Some(policy.failure_message()),
                    photo_location: Some(photo_location),
                    location: Some(location),
                    review: None,
                };
            }
        };

        let preview = match render_preview(photo).await {
            Ok(preview) => preview,
            Err(err) => {
                tracing::warn!(place_id = place.id, %err, "Failed to render a photo preview.");
                return SubmitReviewResponse::rejected(ReviewError::InvalidImage, None);
            }
        };
        let review = Review {
            id: Uuid::new_v4(),
            place_id: place.id,
            travel_type,
            verified_via,
            location: coordinate,
            preview,
        };
        let summary = ReviewSummary::from(&review);
        let review_id = self.app_context.reviews.insert(review).await;
        tracing::info!(
            task = "review_submitted",
            place_id = place.id,
            review_id = %review_id,
            verified_via = ?verified_via,
        );

        SubmitReviewResponse {
            error: false,
            error_code: None,
            message: None,
            photo_location: Some(photo_location),
            location: Some(location),
            review: Some(summary),
        }
    }

    pub async fn list(&self) -> ReviewsResponse {
        if self.place().is_none() {
            return ReviewsResponse {
                error: true,
                error_code: Some(ReviewError::PlaceNotFound),
                reviews: None,
            };
        }
        let reviews = self.app_context.reviews.by_place(self.place_id).await;
        ReviewsResponse {
            error: false,
            error_code: None,
            reviews: Some(reviews.iter().map(ReviewSummary::from).collect()),
        }
    }
}

async fn render_preview(photo: Bytes) -> Result<Vec<u8>, ImageError> {
    tokio::task::spawn_blocking(move || {
        img::preview(&photo, PREVIEW_IMAGE_WIDTH, PREVIEW_IMAGE_HEIGHT)
    })
    .await
    .map_err(|_| ImageError::Aborted)?
}
