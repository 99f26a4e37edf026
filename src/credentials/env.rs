use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildEnv {
    Staging,
    Sandbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub widget_url: &'static str,
    pub api_url: &'static str,
}

impl BuildEnv {
    pub fn config(self) -> EnvironmentConfig {
        match self {
            BuildEnv::Staging => EnvironmentConfig {
                widget_url: "https://credential-widget.test.air3.com",
                api_url: "https://credential.api.test.air3.com",
            },
            BuildEnv::Sandbox => EnvironmentConfig {
                widget_url: "https://credential-widget.sandbox.air3.com",
                api_url: "https://credential.api.sandbox.air3.com",
            },
        }
    }
}
