use crate::app_context::AppContext;
use crate::credentials::responses::{CredentialError, VerificationSessionResponse};
use crate::storage::interface::IReviewStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn verification_session<RS>(
    State(app_context): State<AppContext<RS>>,
) -> Json<VerificationSessionResponse>
where
    RS: IReviewStorage,
{
    let response = match app_context.credentials.open_verification_session().await {
        Ok(session) => VerificationSessionResponse {
            error: false,
            error_code: None,
            session: Some(session),
        },
        Err(err) => {
            tracing::error!(%err, "Failed to get a verifier auth token.");
            VerificationSessionResponse {
                error: true,
                error_code: Some(CredentialError::VerifierAuthFailed),
                session: None,
            }
        }
    };
    Json(response)
}
