//! REST store configuration.

use crate::store::RestResourceStore;

/// Configuration for the REST store adapter.
pub struct Config {
    /// Backend endpoint URL (e.g. `https://abc.example.co`).
    pub url: String,
    /// Access credential sent as `apikey` and bearer token.
    pub key: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESMAP_STORE_URL` or `RESMAP_STORE_KEY` is not
    /// set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            url: std::env::var("RESMAP_STORE_URL")?,
            key: std::env::var("RESMAP_STORE_KEY")?,
        })
    }

    /// Build a [`RestResourceStore`] from this configuration.
    #[must_use]
    pub fn build(self) -> RestResourceStore {
        RestResourceStore::new(self.url, self.key)
    }
}
