//! Cassette mode selection and loading.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Env var naming a cassette to replay instead of calling the skin API.
pub const REPLAY_ENV: &str = "SKINFACE_REPLAY";

/// Env var that turns on recording (`1` or `true`).
pub const RECORD_ENV: &str = "SKINFACE_REC";

/// Directory recordings are written under, one subdirectory per session.
pub const RECORDING_ROOT: &str = ".skinface/cassettes";

/// How the skin source should be wired up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CassetteMode {
    /// Call the real skin API.
    Live,
    /// Call the real API and record every interaction.
    Recording,
    /// Serve interactions from the given cassette file.
    Replaying(PathBuf),
}

impl CassetteMode {
    /// Pick the mode from the process environment. Replay wins over record.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(REPLAY_ENV).ok().as_deref(),
            std::env::var(RECORD_ENV).ok().as_deref(),
        )
    }

    fn from_values(replay: Option<&str>, record: Option<&str>) -> Self {
        if let Some(path) = replay.filter(|p| !p.is_empty()) {
            Self::Replaying(PathBuf::from(path))
        } else if record.is_some_and(|v| v == "true" || v == "1") {
            Self::Recording
        } else {
            Self::Live
        }
    }
}

/// Path of the cassette a recording session started at `timestamp` writes.
#[must_use]
pub fn recording_path(timestamp: &str, port: &str) -> PathBuf {
    PathBuf::from(RECORDING_ROOT).join(timestamp).join(format!("{port}.cassette.yaml"))
}

/// Load a cassette file and create a replayer.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cassette(path: &Path) -> Result<CassetteReplayer, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
    Ok(CassetteReplayer::new(&cassette))
}
