// Favorites endpoints.
//
// Favorites are the device-stored action targets (SIP peers, HTTP
// callback URLs) that schedule outputs reference by id.

use tracing::debug;

use crate::client::DoorBird;
use crate::error::Error;
use crate::models::Favorites;

impl DoorBird {
    /// Fetch all stored favorites, keyed by type then id.
    ///
    /// `GET /bha-api/favorites.cgi` — bare JSON, e.g.
    /// `{ "http": { "0": { "title": "...", "value": "..." } } }`.
    pub async fn favorites(&self) -> Result<Favorites, Error> {
        debug!("fetching favorites");
        self.get_json("favorites.cgi", &[]).await
    }

    /// Create or update a favorite.
    ///
    /// `GET /bha-api/favorites.cgi?action=save&type=...&title=...&value=...`
    /// With `id` set, the existing entry is overwritten; without it the
    /// device picks a free id.
    pub async fn change_favorite(
        &self,
        fav_type: &str,
        title: &str,
        value: &str,
        id: Option<&str>,
    ) -> Result<(), Error> {
        debug!(fav_type, title, "saving favorite");

        let mut params = vec![
            ("action", "save"),
            ("type", fav_type),
            ("title", title),
            ("value", value),
        ];
        if let Some(id) = id {
            params.push(("id", id));
        }

        self.get_empty("favorites.cgi", &params).await
    }

    /// Delete a favorite.
    ///
    /// `GET /bha-api/favorites.cgi?action=remove&type=...&id=...`
    pub async fn delete_favorite(&self, fav_type: &str, id: &str) -> Result<(), Error> {
        debug!(fav_type, id, "deleting favorite");
        self.get_empty(
            "favorites.cgi",
            &[("action", "remove"), ("type", fav_type), ("id", id)],
        )
        .await
    }
}
