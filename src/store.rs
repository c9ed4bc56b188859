use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// The full set of mappings, exactly as serialized on disk: a flat JSON
/// object of short_code → target_url.
pub type LinkMap = HashMap<String, String>;

/// Durable store for link mappings: a single JSON file, read in full on
/// every load and replaced in full on every save.
///
/// The file is created as `{}` the first time it is found missing, so it
/// always exists after first use. Saves go through a temporary file in the
/// same directory followed by an atomic rename, so a concurrent reader sees
/// either the old snapshot or the new one, never a torn write.
#[derive(Debug, Clone)]
pub struct LinkStore {
    path: PathBuf,
}

impl LinkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current snapshot from disk.
    ///
    /// - missing file → the store is initialized to `{}` on disk and an
    ///   empty map is returned
    /// - empty/blank file → empty map, file left untouched
    /// - unparseable content → [`StoreError::Corrupt`]
    pub async fn load(&self) -> Result<LinkMap, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Link store {:?} not found, initializing empty store", self.path);
                let empty = LinkMap::new();
                self.save(&empty).await?;
                return Ok(empty);
            }
            Err(e) => return Err(e.into()),
        };

        let text = String::from_utf8_lossy(&bytes);
        if text.trim().is_empty() {
            return Ok(LinkMap::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the on-disk snapshot with `links`.
    ///
    /// Serialized pretty-printed (two-space indent), written to a sibling
    /// temp file, then renamed over the store path.
    pub async fn save(&self, links: &LinkMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(links)
            .map_err(|e| StoreError::Io(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "links.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
