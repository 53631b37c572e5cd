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

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use terrace_io::SourceManifest;

/// Represents the structure of the `Assets.toml` manifest file.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Settings of the `pack` command.
    #[serde(default)]
    pub pack: PackConfig,

    /// The sources mounted by the `list` command (`[[source]]` tables).
    /// A manifest without any falls back to [`SourceManifest::default`].
    #[serde(flatten)]
    pub manifest: SourceManifest,
}

/// The `[pack]` table.
#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PackConfig {
    /// Directories to scan for source assets.
    pub source_directories: Vec<PathBuf>,
    /// Where `index.bin` and `data.pack` are written.
    pub output: PathBuf,
}

impl Default for PackConfig {
    /// Packs `assets` into `.dist/assets`.
    fn default() -> Self {
        Self {
            source_directories: vec![PathBuf::from("assets")],
            output: PathBuf::from(".dist/assets"),
        }
    }
}

impl AssetsConfig {
    /// Loads the manifest at `path`.
    /// If the file does not exist, it returns the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "No '{}' found. Using default configuration.",
                path.display()
            );
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file at '{}'", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
    }

    /// Parses the TOML text of a manifest.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        if config.manifest.sources.is_empty() {
            log::info!("No [[source]] tables found. Using the default sources.");
            config.manifest = SourceManifest::default();
        }
        Ok(config)
    }
}

/// The directory relative paths in the manifest are resolved against.
pub fn manifest_base_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
