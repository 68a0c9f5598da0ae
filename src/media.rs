// Media endpoints: live/history image and video URLs, snapshot fetch.
//
// The URL builders perform no I/O — they exist so the result can be
// handed to an external consumer (stream player, dashboard card) which
// authenticates via the credentials embedded in the URL. Pixel data is
// never decoded here.

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::client::DoorBird;
use crate::error::Error;

/// Which event recorded a history image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A doorbell ring.
    Doorbell,
    /// A motion sensor trigger.
    MotionSensor,
}

impl HistoryEvent {
    /// The `event` query parameter value for `history.cgi`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doorbell => "doorbell",
            Self::MotionSensor => "motionsensor",
        }
    }
}

impl DoorBird {
    /// URL of a JPEG snapshot with the resolution and compression
    /// configured on the device.
    ///
    /// `GET /bha-api/image.cgi`
    pub fn live_image_url(&self) -> Url {
        self.authenticated_url("image.cgi", &[])
    }

    /// URL of the multipart JPEG (MJPEG) live video stream.
    ///
    /// `GET /bha-api/video.cgi`
    pub fn live_video_url(&self) -> Url {
        self.authenticated_url("video.cgi", &[])
    }

    /// URL of the MPEG H.264 live video stream over RTSP (port 554).
    pub fn rtsp_live_video_url(&self) -> Url {
        self.rtsp_url(554)
    }

    /// URL of the RTSP stream tunnelled over HTTP (port 8557), for
    /// networks where plain RTSP is blocked.
    pub fn rtsp_http_live_video_url(&self) -> Url {
        self.rtsp_url(8557)
    }

    /// URL of the device's HTML5 viewer page.
    pub fn html5_viewer_url(&self) -> Url {
        self.authenticated_url("view.html", &[])
    }

    /// URL of a stored history snapshot.
    ///
    /// `index` 1 is the most recent image; how far back the device
    /// retains images is firmware-defined and not validated here.
    pub fn history_image_url(&self, index: u32, event: HistoryEvent) -> Url {
        self.authenticated_url(
            "history.cgi",
            &[("index", &index.to_string()), ("event", event.as_str())],
        )
    }

    /// Fetch a JPEG snapshot and return the raw bytes.
    ///
    /// `GET /bha-api/image.cgi` — the body is passed through undecoded.
    pub async fn live_image(&self) -> Result<Bytes, Error> {
        debug!("fetching snapshot");
        let resp = self.get_raw("image.cgi", &[]).await?;
        Ok(resp.bytes().await?)
    }

    /// Build an rtsp:// URL for the H.264 stream on the given port.
    ///
    /// `rtsp` is not a "special" scheme, so this can't be derived from
    /// the http base URL via `set_scheme`; it is parsed fresh and the
    /// credentials attached afterwards for correct percent-encoding.
    fn rtsp_url(&self, port: u16) -> Url {
        let host = self.base_url().host_str().expect("base URL has a host");
        let mut url = Url::parse(&format!("rtsp://{host}:{port}/bha-api/mpeg/media.amp"))
            .expect("rtsp URL is valid");
        url.set_username(self.username())
            .expect("rtsp URL has a host");
        url.set_password(Some(self.password_secret()))
            .expect("rtsp URL has a host");
        url
    }
}
