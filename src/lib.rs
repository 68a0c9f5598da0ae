//! Async Rust client for the DoorBird video doorbell LAN HTTP API.
//!
//! A thin, stateless wrapper over the `bha-api` endpoints a unit serves
//! on the local network: door and light relays, live/history image and
//! video URLs, the notification schedule, favorites, and device info.
//! Nothing here decodes pixels or manages streams — media endpoints are
//! returned as URLs (with credentials embedded) for an external
//! consumer to open.
//!
//! ```no_run
//! use doorbird_api::{DoorBird, TransportConfig};
//!
//! # async fn run() -> Result<(), doorbird_api::Error> {
//! let unit = DoorBird::new(
//!     "192.168.1.50",
//!     "ghrlzx0001",
//!     "secret".to_string().into(),
//!     &TransportConfig::default(),
//! )?;
//!
//! if unit.ready().await? {
//!     unit.open_door().await?;
//! }
//! println!("snapshot: {}", unit.live_image_url());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod favorites;
pub mod media;
pub mod models;
pub mod monitor;
pub mod relays;
pub mod schedule;
pub mod system;
pub mod transport;

pub use client::DoorBird;
pub use error::Error;
pub use media::HistoryEvent;
pub use models::{DeviceInfo, Favorite, Favorites};
pub use schedule::{Once, ScheduleEntry, ScheduleOutput, ScheduleTimes, TimeRange};
pub use transport::{TlsMode, TransportConfig};
