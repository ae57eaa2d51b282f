use std::net::SocketAddr;

use crate::errors::{DemoError, DemoResult};

/// Runtime settings for one service process.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub service_name: String,
    pub bind_address: SocketAddr,
    pub log_filter: String,
}

impl ServiceConfig {
    /// Read `BIND_ADDRESS` and `RUST_LOG`, falling back to `0.0.0.0:<default_port>`
    /// and a debug filter for the service crate.
    pub fn from_env(service_name: &str, crate_name: &str, default_port: u16) -> DemoResult<Self> {
        Self::from_values(
            service_name,
            crate_name,
            default_port,
            std::env::var("BIND_ADDRESS").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    pub fn from_values(
        service_name: &str,
        crate_name: &str,
        default_port: u16,
        bind_address: Option<String>,
        log_filter: Option<String>,
    ) -> DemoResult<Self> {
        let bind_address = match bind_address {
            Some(addr) => addr.parse::<SocketAddr>().map_err(|e| {
                DemoError::Config(format!("invalid BIND_ADDRESS {:?}: {}", addr, e))
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], default_port)),
        };

        let log_filter = log_filter
            .unwrap_or_else(|| format!("{}=debug,demo_core=debug,tower_http=debug", crate_name));

        Ok(Self {
            service_name: service_name.to_string(),
            bind_address,
            log_filter,
        })
    }
}
