use crate::resource::ResourceKind;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ICON_DIR: &str = "icons";
const ICON_SUFFIX: &str = "-128.png";
const DATA_URI_PREFIX: &str = "data:image/png;charset=utf-8;base64,";

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read icon {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves icon assets for resource kinds, either as paths into the
/// conventional `icons/` directory or as inlined base64 data URIs.
/// Encoded payloads are cached per resolved path so each icon file is
/// read at most once per resolver.
#[derive(Debug)]
pub struct IconResolver {
    base_dir: PathBuf,
    cache: HashMap<PathBuf, String>,
}

impl IconResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Path to the icon file on disk.
    /// ex) `{base_dir}/icons/pod-128.png`
    pub fn path_absolute(&self, kind: ResourceKind) -> PathBuf {
        self.base_dir.join(ICON_DIR).join(icon_file_name(kind))
    }

    /// Path for embedding into documents that reference external files.
    /// ex) `icons/pod-128.png`
    pub fn path_relative(&self, kind: ResourceKind) -> PathBuf {
        Path::new(ICON_DIR).join(icon_file_name(kind))
    }

    /// Data URI with the icon's base64-encoded contents inlined.
    /// ex) `data:image/png;charset=utf-8;base64,iVBOR...`
    pub fn data_uri(&mut self, kind: ResourceKind) -> Result<String, IconError> {
        let path = self.path_absolute(kind);
        if let Some(encoded) = self.cache.get(&path) {
            return Ok(format!("{DATA_URI_PREFIX}{encoded}"));
        }

        let content = std::fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => IconError::NotFound { path: path.clone() },
            _ => IconError::ReadFailure {
                path: path.clone(),
                source,
            },
        })?;

        let encoded = STANDARD.encode(content);
        let uri = format!("{DATA_URI_PREFIX}{encoded}");
        self.cache.insert(path, encoded);
        Ok(uri)
    }
}

fn icon_file_name(kind: ResourceKind) -> String {
    format!("{}{ICON_SUFFIX}", kind.as_str())
}
