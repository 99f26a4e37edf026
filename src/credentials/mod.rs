use crate::cli::Args;
use crate::credentials::env::{BuildEnv, EnvironmentConfig};
use crate::credentials::partner::{HttpPartnerApi, PartnerApi, PartnerApiError};
use crate::credentials::responses::{CredentialProcess, QueryRequest, VerificationSession};
use std::sync::Arc;
use url::Url;

pub mod env;
pub mod handlers;
pub mod partner;
pub mod responses;

macro_rules! warn_if_setting_is_missing {
    ($value:expr, $name:expr, $message:expr) => {
        if $value.is_empty() {
            tracing::warn!(
                "The `{}` setting isn't configured. {}",
                $name,
                $message
            );
        }
    };
}

#[derive(Clone, Debug)]
pub struct CredentialConfig {
    pub build_env: BuildEnv,
    pub partner_id: String,
    pub verifier_did: String,
    pub verifier_api_key: String,
    pub program_id: String,
}

impl CredentialConfig {
    pub fn from_args(args: &Args) -> Self {
        warn_if_setting_is_missing!(args.partner_id, "AIR_PARTNER_ID", "The widget won't load.");
        warn_if_setting_is_missing!(
            args.verifier_did,
            "VERIFIER_DID",
            "Credential verification won't work."
        );
        warn_if_setting_is_missing!(
            args.verifier_api_key,
            "VERIFIER_API_KEY",
            "Credential verification won't work."
        );
        warn_if_setting_is_missing!(
            args.program_id,
            "PROGRAM_ID",
            "Credential verification won't work."
        );
        Self {
            build_env: args.build_env,
            partner_id: args.partner_id.clone(),
            verifier_did: args.verifier_did.clone(),
            verifier_api_key: args.verifier_api_key.clone(),
            program_id: args.program_id.clone(),
        }
    }

    pub fn environment(&self) -> EnvironmentConfig {
        self.build_env.config()
    }
}

/// Prepares everything the credential widget needs to run a verification.
#[derive(Clone)]
pub struct CredentialService {
    config: CredentialConfig,
    partner: Arc<dyn PartnerApi>,
}

impl CredentialService {
    pub fn new(config: CredentialConfig, partner: Arc<dyn PartnerApi>) -> Self {
        Self { config, partner }
    }

    /// Talks to the partner API of the configured environment, or to `api_url` when given.
    pub fn from_args(args: &Args) -> Result<Self, PartnerApiError> {
        let config = CredentialConfig::from_args(args);
        let api_url = match &args.partner_api_url {
            Some(api_url) => api_url.clone(),
            None => Url::parse(config.environment().api_url)?,
        };
        tracing::info!(build_env = ?config.build_env, %api_url, "Configured the partner API.");
        Ok(Self::new(config, Arc::new(HttpPartnerApi::new(api_url))))
    }

    pub async fn open_verification_session(&self) -> Result<VerificationSession, PartnerApiError> {
        let verifier_auth = self
            .partner
            .verifier_login(&self.config.verifier_did, &self.config.verifier_api_key)
            .await?;
        Ok(VerificationSession {
            widget_url: self.config.environment().widget_url.to_string(),
            build_env: self.config.build_env,
            partner_id: self.config.partner_id.clone(),
            verifier_did: self.config.verifier_did.clone(),
            query_request: QueryRequest {
                process: CredentialProcess::Verify,
                verifier_auth,
                program_id: self.config.program_id.clone(),
            },
        })
    }
}
