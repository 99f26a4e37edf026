use crate::app_context::AppContext;
use crate::places::responses::{PlaceLookupError, PlaceResponse, PlacesResponse};
use crate::storage::interface::IReviewStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn list<RS>(State(app_context): State<AppContext<RS>>) -> Json<PlacesResponse>
where
    RS: IReviewStorage,
{
    Json(PlacesResponse {
        error: false,
        places: app_context.places.all().to_vec(),
    })
}

pub async fn get<RS>(
    Path(place_id): Path<u64>,
    State(app_context): State<AppContext<RS>>,
) -> Json<PlaceResponse>
where
    RS: IReviewStorage,
{
    let response = match app_context.places.get(place_id) {
        Some(place) => PlaceResponse {
            error: false,
            error_code: None,
            place: Some(place.clone()),
        },
        None => PlaceResponse {
            error: true,
            error_code: Some(PlaceLookupError::PlaceNotFound),
            place: None,
        },
    };
    Json(response)
}
