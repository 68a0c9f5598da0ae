// Sensor polling via monitor.cgi.
//
// The endpoint answers in plain text (`doorbell=1`), not JSON. A body
// that doesn't match the `name=value` shape reads as idle, matching
// the vendor's reference client.

use tracing::debug;

use crate::client::DoorBird;
use crate::error::Error;

impl DoorBird {
    /// The current state of the doorbell button.
    ///
    /// `GET /bha-api/monitor.cgi?check=doorbell` — `true` for pressed,
    /// `false` for idle.
    pub async fn doorbell_state(&self) -> Result<bool, Error> {
        self.monitor_state("doorbell").await
    }

    /// The current state of the motion sensor.
    ///
    /// `GET /bha-api/monitor.cgi?check=motionsensor` — `true` for
    /// motion, `false` for idle.
    pub async fn motion_sensor_state(&self) -> Result<bool, Error> {
        self.monitor_state("motionsensor").await
    }

    async fn monitor_state(&self, check: &str) -> Result<bool, Error> {
        let body = self.get_text("monitor.cgi", &[("check", check)]).await?;
        debug!(check, body = body.trim(), "monitor.cgi answered");
        Ok(parse_monitor_body(&body))
    }
}

/// Parse `name=value` monitor output; anything but a `1` value is idle.
fn parse_monitor_body(body: &str) -> bool {
    body.split('=')
        .nth(1)
        .map(str::trim)
        .is_some_and(|value| value.parse::<i64>() == Ok(1))
}

#[cfg(test)]
mod tests {
    use super::parse_monitor_body;

    #[test]
    fn parses_active_and_idle_states() {
        assert!(parse_monitor_body("doorbell=1\r\n"));
        assert!(!parse_monitor_body("doorbell=0\r\n"));
        assert!(!parse_monitor_body("motionsensor=0"));
    }

    #[test]
    fn malformed_body_reads_as_idle() {
        assert!(!parse_monitor_body(""));
        assert!(!parse_monitor_body("garbage"));
        assert!(!parse_monitor_body("doorbell="));
    }
}
