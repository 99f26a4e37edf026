use crate::hoodmap::models::PinCategory;
use crate::hoodmap::pins::PINS;
use crate::hoodmap::requests::CategoryQueryParam;
use crate::hoodmap::responses::{PinStatsResponse, PinsResponse, PlacedPin};
use axum::extract::Query;
use axum::response::Json;

#[axum::debug_handler]
pub async fn pins(Query(query_params): Query<CategoryQueryParam>) -> Json<PinsResponse> {
    let pins = PINS
        .iter()
        .filter(|pin| query_params.category.matches(pin.category))
        .map(|pin| PlacedPin {
            position: pin.screen_position(),
            pin: pin.clone(),
        })
        .collect();
    Json(PinsResponse { error: false, pins })
}

#[axum::debug_handler]
pub async fn stats() -> Json<PinStatsResponse> {
    let count = |category: PinCategory| PINS.iter().filter(|pin| pin.category == category).count();
    Json(PinStatsResponse {
        safe: count(PinCategory::Safe),
        recommended: count(PinCategory::Recommend),
        caution: count(PinCategory::Caution),
        avoid: count(PinCategory::Avoid),
        total_reports: PINS.iter().map(|pin| pin.reports).sum(),
    })
}
