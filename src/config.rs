use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How icons are referenced from generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Relative `icons/...` paths; the icon files must ship next to the
    /// generated document.
    External,
    /// Base64 data URIs inlined into the document; self-contained output.
    Embedded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Directory holding the `icons/` asset subdirectory.
    pub icons_dir: PathBuf,
    pub icon_mode: IconMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from("."),
            icon_mode: IconMode::External,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    icons_dir: Option<PathBuf>,
    icon_mode: Option<IconMode>,
}

pub fn load_options(path: Option<&Path>) -> anyhow::Result<RenderOptions> {
    let mut options = RenderOptions::default();
    let Some(path) = path else {
        return Ok(options);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: OptionsFile = serde_json::from_str(&contents)?;

    if let Some(dir) = parsed.icons_dir {
        options.icons_dir = dir;
    }
    if let Some(mode) = parsed.icon_mode {
        options.icon_mode = mode;
    }

    Ok(options)
}
