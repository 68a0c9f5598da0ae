#![allow(clippy::unwrap_used)]
// Integration + round-trip tests for the schedule endpoints.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doorbird_api::{DoorBird, ScheduleEntry, ScheduleOutput};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DoorBird) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let password: SecretString = "hunter2".to_string().into();
    let client = DoorBird::with_client(reqwest::Client::new(), base_url, "admin", password);
    (server, client)
}

/// A schedule as a real unit emits it: one doorbell entry with a
/// notify output on a weekday window, one motion entry with a relay
/// output armed once.
fn schedule_fixture() -> serde_json::Value {
    json!([
        {
            "input": "doorbell",
            "param": "1",
            "output": [
                {
                    "enabled": "1",
                    "event": "notify",
                    "param": "",
                    "schedule": {
                        "weekdays": [ { "from": "79200", "to": "79199" } ]
                    }
                }
            ]
        },
        {
            "input": "motion",
            "param": "",
            "output": [
                {
                    "enabled": "0",
                    "event": "relay",
                    "param": "1",
                    "schedule": {
                        "once": { "valid": 1 },
                        "from-to": [ { "from": "1524614400", "to": "1527206400" } ]
                    }
                }
            ]
        }
    ])
}

// ── Read path ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_schedule_parses_vendor_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bha-api/schedule.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schedule_fixture()))
        .mount(&server)
        .await;

    let entries = client.schedule().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].input, "doorbell");
    assert_eq!(entries[0].param, "1");
    assert!(entries[0].output[0].enabled);
    assert_eq!(entries[0].output[0].event, "notify");

    let times = &entries[1].output[0].schedule;
    assert_eq!(times.once.unwrap().valid, 1);
    assert_eq!(times.from_to.as_ref().unwrap()[0].from, "1524614400");
    assert!(!entries[1].output[0].enabled);
}

#[tokio::test]
async fn test_schedule_entry_filters_by_input_and_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bha-api/schedule.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schedule_fixture()))
        .mount(&server)
        .await;

    let entry = client.schedule_entry("motion", "").await.unwrap();
    assert_eq!(entry.unwrap().output[0].event, "relay");

    let missing = client.schedule_entry("rfid", "").await.unwrap();
    assert!(missing.is_none());
}

// ── Write path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_change_schedule_posts_wire_encoding() {
    let (server, client) = setup().await;

    let mut output = ScheduleOutput::new("notify", "");
    output.schedule.add_weekday(0, 604_799);
    let mut entry = ScheduleEntry::new("doorbell", "2");
    entry.output.push(output);

    let expected_body = json!({
        "input": "doorbell",
        "param": "2",
        "output": [
            {
                "enabled": "1",
                "event": "notify",
                "param": "",
                "schedule": {
                    "weekdays": [ { "from": "0", "to": "604799" } ]
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/bha-api/schedule.cgi"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.change_schedule(&entry).await.unwrap();
}

#[tokio::test]
async fn test_delete_schedule_entry() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bha-api/schedule.cgi"))
        .and(query_param("action", "remove"))
        .and(query_param("input", "doorbell"))
        .and(query_param("param", "2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.delete_schedule_entry("doorbell", "2").await.unwrap();
}

// ── Round trip ──────────────────────────────────────────────────────

#[test]
fn test_schedule_round_trips_vendor_encoding() {
    let fixture = schedule_fixture();
    let entries: Vec<ScheduleEntry> = serde_json::from_value(fixture.clone()).unwrap();
    assert_eq!(serde_json::to_value(&entries).unwrap(), fixture);
}
