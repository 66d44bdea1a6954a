use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "awl.toml";

/// Workspace-wide settings, loadable from a TOML file.
///
/// Command-line flags override whatever the file says.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AwlConfig {
    /// Spaces per indent level for pretty-printed JSON.
    pub indent: usize,
    /// Where the note collection lives.
    pub notes_path: PathBuf,
}

impl Default for AwlConfig {
    fn default() -> Self {
        Self {
            indent: awl_json::DEFAULT_INDENT,
            notes_path: PathBuf::from("awl-notes.json"),
        }
    }
}

impl AwlConfig {
    /// Loads the configuration for this invocation.
    ///
    /// An explicit path must exist and parse. With no flag, a readable
    /// `awl.toml` in the working directory is used when present; otherwise
    /// every field takes its default.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
