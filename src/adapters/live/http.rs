//! Live adapter that downloads skins over HTTP.

use reqwest::{Client, StatusCode};

use crate::error::AvatarError;
use crate::ports::skin_source::{FetchFuture, FetchedSkin, SkinSource};

/// Default skin API host.
pub const DEFAULT_UPSTREAM: &str = "https://api.creepernation.net";

/// Pixel size requested from the skin API.
const SKIN_SIZE: u32 = 64;

/// Live skin source that calls `{base_url}/raw/{uuid}?size=64`.
pub struct HttpSkinSource {
    client: Client,
    base_url: String,
}

impl HttpSkinSource {
    /// Create a new source against the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base_url }
    }

    /// The fully-formed skin URL for a player; `uuid` is inserted verbatim.
    #[must_use]
    pub fn skin_url(&self, uuid: &str) -> String {
        format!("{}/raw/{uuid}?size={SKIN_SIZE}", self.base_url)
    }
}

impl SkinSource for HttpSkinSource {
    fn fetch(&self, uuid: &str) -> FetchFuture<'_> {
        let url = self.skin_url(uuid);
        Box::pin(async move {
            tracing::debug!(%url, "fetching skin");
            let response = self.client.get(&url).send().await?;

            let status = response.status();
            if status != StatusCode::OK {
                tracing::debug!(%url, status = status.as_u16(), "skin API refused");
                return Err(AvatarError::Download { status: status.as_u16() });
            }

            let data = response.bytes().await?.to_vec();
            Ok(FetchedSkin { data })
        })
    }
}
