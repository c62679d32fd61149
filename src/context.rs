//! Service context shared by every request handler.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::http::HttpSkinSource;
use crate::adapters::recording::skin_source::RecordingSkinSource;
use crate::adapters::replaying::skin_source::ReplayingSkinSource;
use crate::cassette::config::{load_cassette, recording_path};
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Settings;
use crate::error::AvatarError;
use crate::pipeline::render_avatar;
use crate::ports::SkinSource;

/// Immutable per-process state: where skins come from and how much to
/// magnify them. Shared across requests behind an `Arc`.
pub struct ServiceContext {
    /// Skin source port.
    pub source: Box<dyn SkinSource>,
    /// Upscale factor.
    pub scale: u32,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        if recorder.is_empty() {
            tracing::warn!("Recording session captured no skin fetches");
        } else {
            tracing::debug!(interactions = recorder.len(), "writing cassette");
        }
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a context around any skin source.
    #[must_use]
    pub fn new(source: Box<dyn SkinSource>, scale: u32) -> Self {
        Self { source, scale }
    }

    /// Create a live context that downloads skins from the configured upstream.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        Self::new(Box::new(HttpSkinSource::new(settings.upstream.clone())), settings.scale)
    }

    /// Create a recording context that wraps the live source with a recorder.
    #[must_use]
    pub fn recording(settings: &Settings) -> (Self, RecordingSession) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = recording_path(&timestamp, "skin_source");
        Self::recording_to(settings, path, format!("{timestamp}-skin_source"))
    }

    /// Like [`ServiceContext::recording`], writing the cassette to `path`.
    #[must_use]
    pub fn recording_to(
        settings: &Settings,
        path: PathBuf,
        name: String,
    ) -> (Self, RecordingSession) {
        let live_ctx = Self::live(settings);
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, get_commit_hash())));

        let source = RecordingSkinSource::new(live_ctx.source, Arc::clone(&recorder));
        let ctx = Self::new(Box::new(source), settings.scale);

        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path, scale: u32) -> Result<Self, AvatarError> {
        let replayer = load_cassette(path)
            .map_err(|e| AvatarError::Config(format!("Failed to load cassette: {e}")))?;
        let source = ReplayingSkinSource::new(Arc::new(Mutex::new(replayer)));
        Ok(Self::new(Box::new(source), scale))
    }

    /// Render the PNG avatar for one player.
    ///
    /// # Errors
    ///
    /// Returns whatever pipeline stage failed.
    pub async fn render(&self, uuid: &str) -> Result<Vec<u8>, AvatarError> {
        render_avatar(self.source.as_ref(), uuid, self.scale).await
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
