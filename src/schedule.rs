// Notification schedule: types and endpoints.
//
// `schedule.cgi` returns a bare JSON array (no BHA envelope). The wire
// encoding is stringly typed throughout: enables are `"1"`/`"0"` and
// times are decimal strings of seconds. The types here round-trip that
// encoding exactly so an entry can be fetched, edited, and posted back.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::DoorBird;
use crate::error::Error;

/// One schedule entry: an input (sensor) plus the outputs it triggers.
///
/// ```json
/// { "input": "doorbell", "param": "1", "output": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Trigger input: `"doorbell"`, `"motion"`, `"rfid"`, `"relay"`.
    pub input: String,
    /// Input qualifier (e.g. the doorbell button or relay number).
    #[serde(default)]
    pub param: String,
    /// Actions fired when the input triggers.
    #[serde(default)]
    pub output: Vec<ScheduleOutput>,
}

impl ScheduleEntry {
    /// A new entry for the given input with no outputs yet.
    pub fn new(input: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            param: param.into(),
            output: Vec::new(),
        }
    }
}

/// One output action of a schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    /// Whether the action is active; `"1"`/`"0"` on the wire.
    #[serde(
        default = "default_enabled",
        serialize_with = "ser_string_bool",
        deserialize_with = "de_string_bool"
    )]
    pub enabled: bool,
    /// Action type: `"notify"`, `"http"`, `"relay"`, `"sip"`, ...
    pub event: String,
    /// Action qualifier (e.g. the favorite id an `"http"` action calls).
    #[serde(default)]
    pub param: String,
    /// When the action is allowed to fire.
    #[serde(default)]
    pub schedule: ScheduleTimes,
}

impl ScheduleOutput {
    /// A new enabled action with an always-off schedule.
    pub fn new(event: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            enabled: true,
            event: event.into(),
            param: param.into(),
            schedule: ScheduleTimes::default(),
        }
    }
}

/// The time windows during which an output fires.
///
/// All three fields are optional on the wire; an empty object means
/// "never". `from`/`to` values are decimal strings of seconds: absolute
/// unix timestamps for `from-to`, seconds since Sunday 00:00 for
/// `weekdays`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub once: Option<Once>,
    #[serde(rename = "from-to", default, skip_serializing_if = "Option::is_none")]
    pub from_to: Option<Vec<TimeRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<TimeRange>>,
}

impl ScheduleTimes {
    /// Arm or disarm a one-shot schedule; the device clears `valid`
    /// after the next trigger.
    pub fn set_once(&mut self, enabled: bool) {
        self.once = Some(Once {
            valid: i64::from(enabled),
        });
    }

    /// Allow firing between two absolute unix timestamps.
    pub fn add_range(&mut self, sec_from: u64, sec_to: u64) {
        self.from_to
            .get_or_insert_with(Vec::new)
            .push(TimeRange::new(sec_from, sec_to));
    }

    /// Allow firing weekly between two offsets (seconds since Sunday
    /// 00:00).
    pub fn add_weekday(&mut self, sec_from: u64, sec_to: u64) {
        self.weekdays
            .get_or_insert_with(Vec::new)
            .push(TimeRange::new(sec_from, sec_to));
    }
}

/// One-shot marker: `{ "valid": 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Once {
    #[serde(deserialize_with = "crate::models::int_from_string_or_number")]
    pub valid: i64,
}

/// A `{ "from": "...", "to": "..." }` window of decimal-second strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(sec_from: u64, sec_to: u64) -> Self {
        Self {
            from: sec_from.to_string(),
            to: sec_to.to_string(),
        }
    }
}

// ── Wire helpers ─────────────────────────────────────────────────────

fn default_enabled() -> bool {
    true
}

fn ser_string_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "1" } else { "0" })
}

/// Accept `"1"`, `1`, or `true`; firmware versions disagree.
fn de_string_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Num(i64),
        Str(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b,
        Raw::Num(n) => n == 1,
        Raw::Str(s) => s.trim() == "1",
    })
}

// ── Endpoints ────────────────────────────────────────────────────────

impl DoorBird {
    /// Fetch the full notification schedule.
    ///
    /// `GET /bha-api/schedule.cgi`
    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>, Error> {
        debug!("fetching schedule");
        self.get_json("schedule.cgi", &[]).await
    }

    /// Find the schedule entry for a given input and param, if any.
    pub async fn schedule_entry(
        &self,
        input: &str,
        param: &str,
    ) -> Result<Option<ScheduleEntry>, Error> {
        let entries = self.schedule().await?;
        Ok(entries
            .into_iter()
            .find(|e| e.input == input && e.param == param))
    }

    /// Create or replace a schedule entry.
    ///
    /// `POST /bha-api/schedule.cgi` with the entry as the JSON body.
    /// The device matches on `(input, param)`.
    pub async fn change_schedule(&self, entry: &ScheduleEntry) -> Result<(), Error> {
        debug!(input = %entry.input, param = %entry.param, "updating schedule entry");
        self.post_json("schedule.cgi", entry).await
    }

    /// Delete a schedule entry.
    ///
    /// `GET /bha-api/schedule.cgi?action=remove&input=...&param=...`
    pub async fn delete_schedule_entry(&self, input: &str, param: &str) -> Result<(), Error> {
        debug!(input, param, "deleting schedule entry");
        self.get_empty(
            "schedule.cgi",
            &[("action", "remove"), ("input", input), ("param", param)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn builder_helpers_shape_the_wire_format() {
        let mut times = ScheduleTimes::default();
        times.set_once(true);
        times.add_weekday(79200, 79199);

        let json = serde_json::to_value(&times).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "once": { "valid": 1 },
                "weekdays": [{ "from": "79200", "to": "79199" }]
            })
        );
    }

    #[test]
    fn enabled_flag_round_trips_as_string() {
        let output = ScheduleOutput::new("notify", "");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["enabled"], serde_json::json!("1"));

        let back: ScheduleOutput = serde_json::from_value(json).unwrap();
        assert!(back.enabled);
    }

    #[test]
    fn enabled_flag_accepts_legacy_encodings() {
        for raw in [r#""0""#, "0", "false"] {
            let body = format!(r#"{{ "enabled": {raw}, "event": "notify" }}"#);
            let output: ScheduleOutput = serde_json::from_str(&body).unwrap();
            assert!(!output.enabled, "raw {raw} should decode as disabled");
        }
    }
}
