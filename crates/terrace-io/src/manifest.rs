// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declarative configuration of the sources an application mounts.
//!
//! A [`SourceManifest`] lists sources by id and kind. It is format-agnostic
//! (any serde format works); the tooling reads it from an `Assets.toml`:
//!
//! ```toml
//! [[source]]
//! id = "engine"
//! kind = "directory"
//! path = "assets"
//!
//! [[source]]
//! id = "dlc"
//! kind = "pack"
//! path = ".dist/dlc"
//! ```

use crate::directory::DirectorySource;
use crate::error::{Result, SourceError};
use crate::pack::PackSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use terrace_core::registry::AssetSourceRegistry;
use terrace_core::source::{AssetSource, NullSource};

/// The list of sources to mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceManifest {
    /// Sources, in registration order.
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceConfig>,
}

/// How to build a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Id the source is registered under.
    pub id: String,
    /// Kind of backing store.
    pub kind: SourceKind,
    /// Directory to read from. Relative paths are resolved against the base
    /// directory given to [`build_registry`]. Unused for disabled sources.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// The backing store of a configured source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A [`DirectorySource`].
    Directory,
    /// A [`PackSource`].
    Pack,
    /// A registered id that serves nothing.
    Disabled,
}

impl Default for SourceManifest {
    /// A single directory source, `engine`, reading from `assets`.
    fn default() -> Self {
        Self {
            sources: vec![SourceConfig {
                id: "engine".to_string(),
                kind: SourceKind::Directory,
                path: Some(PathBuf::from("assets")),
            }],
        }
    }
}

impl SourceConfig {
    /// The configured path resolved against `base_dir`.
    pub fn resolved_path(&self, base_dir: &Path) -> Result<PathBuf> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| SourceError::MissingPath(self.id.clone()))?;
        Ok(base_dir.join(path))
    }

    /// Builds the source this entry describes.
    pub fn open(&self, base_dir: &Path) -> Result<Arc<dyn AssetSource>> {
        let source: Arc<dyn AssetSource> = match self.kind {
            SourceKind::Directory => Arc::new(DirectorySource::scan(
                self.id.clone(),
                self.resolved_path(base_dir)?,
            )?),
            SourceKind::Pack => Arc::new(PackSource::open(
                self.id.clone(),
                self.resolved_path(base_dir)?,
            )?),
            SourceKind::Disabled => Arc::new(NullSource::new(self.id.clone())),
        };
        Ok(source)
    }
}

/// Builds a registry holding every source of `manifest`.
///
/// A source that fails to open is logged and mounted as a [`NullSource`],
/// so its id stays known and every lookup through it stays total. When an
/// id appears more than once, the last entry wins.
pub fn build_registry(
    manifest: &SourceManifest,
    base_dir: impl AsRef<Path>,
) -> AssetSourceRegistry {
    let base_dir = base_dir.as_ref();
    let registry = AssetSourceRegistry::new();

    for config in &manifest.sources {
        let source = config.open(base_dir).unwrap_or_else(|e| {
            log::warn!("Asset source '{}' is unavailable: {e}", config.id);
            Arc::new(NullSource::new(config.id.clone())) as Arc<dyn AssetSource>
        });

        if registry.register_shared(source).is_some() {
            log::warn!(
                "Asset source '{}' is defined more than once; the last definition wins",
                config.id
            );
        }
    }

    log::info!("Mounted {} asset sources", registry.len());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrace_core::asset::{AssetType, AssetUri};

    #[test]
    fn test_default_manifest() {
        let manifest = SourceManifest::default();
        assert_eq!(manifest.sources.len(), 1);
        assert_eq!(manifest.sources[0].id, "engine");
        assert_eq!(manifest.sources[0].kind, SourceKind::Directory);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let config = SourceConfig {
            id: "broken".to_string(),
            kind: SourceKind::Pack,
            path: None,
        };
        assert!(matches!(
            config.open(Path::new(".")),
            Err(SourceError::MissingPath(id)) if id == "broken"
        ));
    }

    #[test]
    fn test_unavailable_sources_are_mounted_empty() {
        let manifest = SourceManifest {
            sources: vec![
                SourceConfig {
                    id: "missing".to_string(),
                    kind: SourceKind::Directory,
                    path: Some(PathBuf::from("definitely/not/here")),
                },
                SourceConfig {
                    id: "off".to_string(),
                    kind: SourceKind::Disabled,
                    path: None,
                },
            ],
        };

        let registry = build_registry(&manifest, "/nonexistent-base");
        assert_eq!(registry.source_ids(), vec!["missing", "off"]);
        assert!(registry.list().is_empty());

        let uri = AssetUri::new(AssetType::Texture, "missing", "grass");
        assert!(registry.resolve(&uri).is_none());
    }
}
