// Transport configuration for building the underlying reqwest::Client.
//
// DoorBird units speak plain HTTP on the LAN by default; newer firmware
// also serves HTTPS with a self-signed certificate, so certificate
// handling mirrors what self-hosted gear needs.

use std::path::PathBuf;
use std::time::Duration;

/// TLS verification mode for HTTPS-capable units.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed device certs).
    DangerAcceptInvalid,
}

/// Connection settings for a doorbell unit.
///
/// `secure` selects `https://` over `http://`; `port` overrides the
/// scheme default (80/443). The timeout applies to every request,
/// including the snapshot fetch.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub secure: bool,
    pub port: Option<u16>,
    pub timeout: Duration,
    pub tls: TlsMode,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            secure: false,
            port: None,
            timeout: Duration::from_secs(10),
            tls: TlsMode::DangerAcceptInvalid,
        }
    }
}

impl TransportConfig {
    /// The URL scheme this config selects.
    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("doorbird-api/", env!("CARGO_PKG_VERSION")));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path).map_err(|e| {
                    crate::error::Error::Tls(format!("failed to read CA cert: {e}"))
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| crate::error::Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
