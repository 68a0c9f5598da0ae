// Relay endpoints: door opener and light.

use tracing::debug;

use crate::client::DoorBird;
use crate::error::Error;
use crate::models::Empty;

impl DoorBird {
    /// Energize the door opener/alarm output relay.
    ///
    /// `GET /bha-api/open-door.cgi?r={relay}` — relay ids are strings
    /// because IP peripheral relays look like `"gggggg@1"`. Returns
    /// `true` when the device reports `RETURNCODE` 1.
    pub async fn energize_relay(&self, relay: &str) -> Result<bool, Error> {
        debug!(relay, "energizing relay");
        let bha = self
            .get_bha::<Empty>("open-door.cgi", &[("r", relay)])
            .await?;
        Ok(bha.is_ok())
    }

    /// Energize the built-in door relay (relay `"1"`).
    pub async fn open_door(&self) -> Result<bool, Error> {
        self.energize_relay("1").await
    }

    /// Energize the light relay (activates IR/white light depending on
    /// the model).
    ///
    /// `GET /bha-api/light-on.cgi`
    pub async fn turn_light_on(&self) -> Result<bool, Error> {
        debug!("turning light on");
        let bha = self.get_bha::<Empty>("light-on.cgi", &[]).await?;
        Ok(bha.is_ok())
    }
}
