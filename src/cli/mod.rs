use crate::credentials::env::BuildEnv;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "places.example.ndjson")]
    pub places: PathBuf,
    /// Frontend origins allowed by the CORS policy.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    #[arg(long, value_enum)]
    #[arg(default_value = "sandbox")]
    pub build_env: BuildEnv,
    /// Overrides the partner API URL implied by `--build-env`.
    #[arg(long, env = "PARTNER_API_URL")]
    pub partner_api_url: Option<Url>,
    #[arg(long, env = "AIR_PARTNER_ID", default_value = "")]
    pub partner_id: String,
    #[arg(long, env = "VERIFIER_DID", default_value = "")]
    pub verifier_did: String,
    #[arg(long, env = "VERIFIER_API_KEY", default_value = "")]
    pub verifier_api_key: String,
    #[arg(long, env = "PROGRAM_ID", default_value = "")]
    pub program_id: String,
    /// Photos taken closer than this to the place count as presence.
    #[arg(long)]
    #[arg(default_value_t = 500.0)]
    pub photo_radius_m: f64,
    /// Device readings closer than this to the place count as presence.
    #[arg(long)]
    #[arg(default_value_t = 100.0)]
    pub device_radius_m: f64,
    #[arg(long)]
    pub disable_region_fallback: bool,
    #[arg(long)]
    #[arg(default_value_t = 10_000_000)]
    pub max_upload_bytes: usize,
}
