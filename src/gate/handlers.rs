use crate::gate::requests::{Gender, GenderSelection};
use crate::gate::responses::GateResponse;
use axum::response::Json;

/// Simulated gate: only the self-declared selection is checked, nothing is proven here.
#[axum::debug_handler]
pub async fn verify_gender(Json(selection): Json<GenderSelection>) -> Json<GateResponse> {
    let access_granted = selection.gender == Gender::Female;
    tracing::info!(task = "gender_gate", access_granted);
    Json(GateResponse {
        access_granted,
        message: String::from(if access_granted {
            "Access Granted"
        } else {
            "No Access"
        }),
    })
}
