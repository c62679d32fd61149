//! Skin source port for the third-party skin API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::AvatarError;

/// Raw skin bytes as served by the upstream, before decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedSkin {
    /// Encoded image bytes (usually PNG).
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Boxed future type returned by [`SkinSource::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<FetchedSkin, AvatarError>> + Send + 'a>>;

/// Fetches player skins from an external API.
pub trait SkinSource: Send + Sync {
    /// Fetch the skin of the player identified by `uuid`.
    fn fetch(&self, uuid: &str) -> FetchFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
