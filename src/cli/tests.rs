use crate::cli::Args;
use crate::credentials::env::BuildEnv;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        places: PathBuf::from("places.example.ndjson"),
        allowed_origins: vec![String::from("http://localhost:3000")],
        build_env: BuildEnv::Sandbox,
        partner_api_url: None,
        partner_id: String::from("testPartnerId"),
        verifier_did: String::from("did:air:id:test:verifier"),
        verifier_api_key: String::from("testApiKey"),
        program_id: String::from("testProgramId"),
        photo_radius_m: 500.0,
        device_radius_m: 100.0,
        disable_region_fallback: false,
        max_upload_bytes: 10_000_000,
    }
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["hoodmap-server"]).expect("Failed to parse empty args.");

    assert_eq!(args.build_env, BuildEnv::Sandbox);
    assert_eq!(args.photo_radius_m, 500.0);
    assert_eq!(args.device_radius_m, 100.0);
    assert!(!args.disable_region_fallback);
    assert_eq!(args.allowed_origins.len(), 2);
}

#[test]
fn test_overrides() {
    let args = Args::try_parse_from([
        "hoodmap-server",
        "--build-env",
        "staging",
        "--photo-radius-m",
        "250",
        "--allowed-origins",
        "https://hoodmap.example",
        "--disable-region-fallback",
    ])
    .expect("Failed to parse args.");

    assert_eq!(args.build_env, BuildEnv::Staging);
    assert_eq!(args.photo_radius_m, 250.0);
    assert_eq!(args.allowed_origins, vec!["https://hoodmap.example"]);
    assert!(args.disable_region_fallback);
}
