// System endpoints: reachability check, device info, restart.

use tracing::debug;

use crate::client::DoorBird;
use crate::error::Error;
use crate::models::{DeviceInfo, Empty, InfoPayload};

impl DoorBird {
    /// Test the connection to the device.
    ///
    /// `GET /bha-api/info.cgi` — returns `true` iff the device answered
    /// with a 2xx status and `RETURNCODE` 1. Credential and reachability
    /// failures surface as [`Error`]s, not as `false`.
    pub async fn ready(&self) -> Result<bool, Error> {
        let bha = self.get_bha::<Empty>("info.cgi", &[]).await?;
        Ok(bha.is_ok())
    }

    /// Fetch firmware and model metadata.
    ///
    /// `GET /bha-api/info.cgi` — unwraps the single element of
    /// `BHA.VERSION`.
    pub async fn info(&self) -> Result<DeviceInfo, Error> {
        let bha = self.get_bha::<InfoPayload>("info.cgi", &[]).await?;
        debug!(return_code = bha.return_code, "info.cgi answered");

        if !bha.is_ok() {
            return Err(Error::UnexpectedResponse {
                message: format!("info.cgi returned code {}", bha.return_code),
                body: String::new(),
            });
        }

        bha.payload
            .version
            .into_iter()
            .next()
            .ok_or_else(|| Error::UnexpectedResponse {
                message: "info.cgi returned an empty VERSION list".into(),
                body: String::new(),
            })
    }

    /// Restart the device.
    ///
    /// `GET /bha-api/restart.cgi` — success is the HTTP status alone.
    pub async fn restart(&self) -> Result<(), Error> {
        debug!("restarting device");
        self.get_empty("restart.cgi", &[]).await
    }
}
