use crate::app_context::AppContext;
use crate::reviews::requests::ReviewUpload;
use crate::reviews::responses::{
    PhotoCheckResponse, ReviewError, ReviewsResponse, SubmitReviewResponse,
};
use crate::reviews::services::ReviewHttpHandler;
use crate::storage::interface::IReviewStorage;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

pub async fn photo_check<RS>(
    Path(place_id): Path<u64>,
    State(app_context): State<AppContext<RS>>,
    multipart: Multipart,
) -> Json<PhotoCheckResponse>
where
    RS: IReviewStorage,
{
    let upload = match ReviewUpload::read(multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            return Json(PhotoCheckResponse::rejected(
                ReviewError::InvalidUpload,
                Some(err.to_string()),
            ))
        }
    };
    let response = ReviewHttpHandler::new(app_context, place_id)
        .photo_check(upload)
        .await;
    Json(response)
}

pub async fn submit<RS>(
    Path(place_id): Path<u64>,
    State(app_context): State<AppContext<RS>>,
    multipart: Multipart,
) -> Json<SubmitReviewResponse>
where
    RS: IReviewStorage,
{
    let upload = match ReviewUpload::read(multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            return Json(SubmitReviewResponse::rejected(
                ReviewError::InvalidUpload,
                Some(err.to_string()),
            ))
        }
    };
    let response = ReviewHttpHandler::new(app_context, place_id)
        .submit(upload)
        .await;
    Json(response)
}

pub async fn list<RS>(
    Path(place_id): Path<u64>,
    State(app_context): State<AppContext<RS>>,
) -> Json<ReviewsResponse>
where
    RS: IReviewStorage,
{
    let response = ReviewHttpHandler::new(app_context, place_id).list().await;
    Json(response)
}

pub async fn preview<RS>(
    Path(review_id): Path<Uuid>,
    State(app_context): State<AppContext<RS>>,
) -> Response
where
    RS: IReviewStorage,
{
    match app_context.reviews.preview(review_id).await {
        Some(preview) => ([(header::CONTENT_TYPE, "image/png")], preview).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
