// Response types for the BHA endpoints.
//
// Most control endpoints wrap their payload in the `BHA` envelope; the
// newer `schedule.cgi` / `favorites.cgi` endpoints return bare JSON.
// Fields use `#[serde(default)]` liberally because firmware versions
// differ in which fields they emit.

use std::collections::HashMap;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

// ── BHA envelope ─────────────────────────────────────────────────────

/// Standard DoorBird response envelope.
///
/// Every control endpoint wraps its payload:
/// ```json
/// { "BHA": { "RETURNCODE": "1", ... } }
/// ```
#[derive(Debug, Deserialize)]
pub struct BhaResponse<T> {
    #[serde(rename = "BHA")]
    pub bha: Bha<T>,
}

/// Envelope contents. `RETURNCODE` == 1 means success; the firmware
/// emits it as a string (`"1"`) but older builds used a bare number.
#[derive(Debug, Deserialize)]
pub struct Bha<T> {
    #[serde(rename = "RETURNCODE", deserialize_with = "int_from_string_or_number")]
    pub return_code: i64,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Bha<T> {
    /// Whether the device reported success.
    pub fn is_ok(&self) -> bool {
        self.return_code == 1
    }
}

/// Payload for endpoints that return nothing beyond the return code
/// (`open-door.cgi`, `light-on.cgi`).
#[derive(Debug, Default, Deserialize)]
pub struct Empty {}

// ── Device info ──────────────────────────────────────────────────────

/// Payload of `info.cgi`: `{ "BHA": { "RETURNCODE": "1", "VERSION": [..] } }`.
#[derive(Debug, Deserialize)]
pub struct InfoPayload {
    #[serde(rename = "VERSION", default)]
    pub version: Vec<DeviceInfo>,
}

/// Firmware/model metadata from `info.cgi`.
///
/// `WIFI_MAC_ADDR` is only present when the unit is connected via WiFi;
/// `RELAYS` and `DEVICE-TYPE` appeared in later firmware. Undocumented
/// fields land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(rename = "FIRMWARE")]
    pub firmware: String,
    #[serde(rename = "BUILD_NUMBER")]
    pub build_number: String,
    #[serde(rename = "WIFI_MAC_ADDR", default, skip_serializing_if = "Option::is_none")]
    pub wifi_mac_addr: Option<String>,
    #[serde(rename = "RELAYS", default, skip_serializing_if = "Option::is_none")]
    pub relays: Option<Vec<String>>,
    #[serde(rename = "DEVICE-TYPE", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Catch-all for fields newer firmware may add.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Favorites ────────────────────────────────────────────────────────

/// A single favorite entry from `favorites.cgi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub title: String,
    pub value: String,
}

/// Favorites listing: favorite type (`"sip"`, `"http"`) → id → entry.
pub type Favorites = HashMap<String, HashMap<String, Favorite>>;

// ── Serde helpers ────────────────────────────────────────────────────

/// Accept an integer encoded as a JSON string or a bare number.
pub(crate) fn int_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
