use thiserror::Error;

/// Top-level error type for the `doorbird-api` crate.
///
/// Covers every failure mode the LAN API can produce: bad credentials,
/// an unreachable device, and responses that don't match the documented
/// contract. Callers branch on these to tell "device refused" apart from
/// "device unreachable" apart from "device answered garbage".
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The device rejected the credentials (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// The device could not be reached (connection refused, DNS failure,
    /// or request timeout).
    #[error("Device unreachable: {source}")]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    /// Any other HTTP transport error (TLS handshake, body read, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(reqwest::Error),

    /// URL parsing error (bad host or port at construction).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup error (unreadable or invalid CA certificate).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Device responses ────────────────────────────────────────────
    /// The device answered with a non-2xx status outside the auth range.
    #[error("Device error (HTTP {status}): {message}")]
    Device { status: u16, message: String },

    /// The response body does not match the documented API contract,
    /// with the raw body kept for debugging.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String, body: String },
}

impl From<reqwest::Error> for Error {
    /// Classify transport failures: connect and timeout errors become
    /// [`Error::Unreachable`], everything else stays [`Error::Transport`].
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::Unreachable { source: e }
        } else {
            Self::Transport(e)
        }
    }
}

impl Error {
    /// Returns `true` if this error means the credentials were rejected.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if the device could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Returns `true` if this is a transient error worth retrying
    /// (the crate itself never retries; that's the caller's policy).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable { .. } => true,
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
