use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Code the partner backend puts into a successful response envelope.
pub const SUCCESS_CODE: i64 = 80_000_000;

#[derive(Debug, Error)]
pub enum PartnerApiError {
    #[error("invalid partner API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("partner API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("partner API call failed with status: {0}")]
    Status(StatusCode),
    #[error("partner API didn't issue a token (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

#[async_trait]
pub trait PartnerApi: Send + Sync {
    /// Exchanges the verifier's DID and API key for a short-lived verifier auth token.
    async fn verifier_login(&self, verifier_did: &str, api_key: &str)
        -> Result<String, PartnerApiError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierLoginRequest<'a> {
    pub verifier_did: &'a str,
    pub auth_token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PartnerEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub token: Option<String>,
}

impl PartnerEnvelope<TokenData> {
    pub fn into_token(self) -> Result<String, PartnerApiError> {
        let token = self.data.and_then(|data| data.token);
        match token {
            Some(token) if self.code == SUCCESS_CODE && !token.is_empty() => Ok(token),
            _ => Err(PartnerApiError::Rejected {
                code: self.code,
                message: self.msg.unwrap_or_else(|| String::from("Unknown error")),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpPartnerApi {
    client: Client,
    api_url: Url,
}

impl HttpPartnerApi {
    pub fn new(mut api_url: Url) -> Self {
        // `Url::join` replaces the last path segment unless the base ends with a slash.
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl PartnerApi for HttpPartnerApi {
    async fn verifier_login(
        &self,
        verifier_did: &str,
        api_key: &str,
    ) -> Result<String, PartnerApiError> {
        let endpoint = self.api_url.join("verifier/login")?;
        let response = self
            .client
            .post(endpoint)
            .header("accept", "*/*")
            .header("X-Test", "true")
            .json(&VerifierLoginRequest {
                verifier_did,
                auth_token: api_key,
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PartnerApiError::Status(response.status()));
        }
        response
            .json::<PartnerEnvelope<TokenData>>()
            .await?
            .into_token()
    }
}
