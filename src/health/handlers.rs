use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::IReviewStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<RS>(State(app_context): State<AppContext<RS>>) -> Json<HealthCheckResponse>
where
    RS: IReviewStorage,
{
    Json(HealthCheckResponse {
        error: false,
        places: app_context.places.all().len(),
    })
}
