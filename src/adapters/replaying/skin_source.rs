//! Replaying adapter for the `SkinSource` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::AvatarError;
use crate::ports::skin_source::{FetchFuture, FetchedSkin, SkinSource};

/// Serves recorded skin fetches from a cassette, in recording order.
///
/// The requested UUID is not matched against the recording.
pub struct ReplayingSkinSource {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingSkinSource {
    /// Create a replaying source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl SkinSource for ReplayingSkinSource {
    fn fetch(&self, _uuid: &str) -> FetchFuture<'_> {
        let result = next_output(&self.replayer, "skin_source", "fetch")
            .and_then(replay_result::<FetchedSkin>)
            .map_err(AvatarError::Replay);
        Box::pin(async move { result })
    }
}
