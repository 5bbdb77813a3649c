use crate::models::Movie;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const STORE_FILE: &str = "watch_later.json";

/// File-backed persistence for the watch-later list.
///
/// The whole list is rewritten after every mutation. Writes go through a
/// temp file and a rename so a crash never leaves a half-written file;
/// last-write-wins is fine here since the catalog is the only writer.
#[derive(Debug, Clone)]
pub struct WatchLaterStore {
    path: PathBuf,
}

impl WatchLaterStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `$CINESHELF_DATA_DIR`, or the platform data
    /// directory under an app-scoped folder.
    pub fn from_env() -> Result<Self> {
        let dir = match env_data_dir() {
            Some(dir) => dir,
            None => dirs::data_dir()
                .context("no platform data directory available")?
                .join("cineshelf"),
        };
        Ok(Self::new(dir.join(STORE_FILE)))
    }

    /// Reads the persisted list. An absent or malformed file yields the
    /// empty list; local cache problems are never surfaced as errors.
    pub fn load(&self) -> Vec<Movie> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = ?self.path, "no watch-later data: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(movies) => movies,
            Err(e) => {
                debug!(path = ?self.path, "discarding malformed watch-later data: {e}");
                Vec::new()
            }
        }
    }

    /// Serializes the full list and atomically replaces the file.
    pub fn save(&self, movies: &[Movie]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(movies).context("serializing watch-later list")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

fn env_data_dir() -> Option<PathBuf> {
    std::env::var_os("CINESHELF_DATA_DIR").map(PathBuf::from)
}
