#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod deserialize;
pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod permissions;
pub mod router;
pub mod token_validator;
pub mod build_info {
    pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
    pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}
mod middleware;

pub use middleware::Authorized;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    /// HS256 secret used to verify and issue bearer tokens
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// seconds of tolerance when checking `exp`
    pub jwt_leeway: u64,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}
