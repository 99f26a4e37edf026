use crate::credentials::env::BuildEnv;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<CredentialError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<VerificationSession>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CredentialError {
    VerifierAuthFailed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSession {
    pub widget_url: String,
    pub build_env: BuildEnv,
    pub partner_id: String,
    pub verifier_did: String,
    pub query_request: QueryRequest,
}

/// Query handed to the credential widget as is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub process: CredentialProcess,
    pub verifier_auth: String,
    pub program_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CredentialProcess {
    Verify,
}
