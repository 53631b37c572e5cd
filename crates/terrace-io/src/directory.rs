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

use crate::error::{Result, SourceError};
use crate::layout;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use terrace_core::asset::{AssetLocation, AssetUri};
use terrace_core::source::{AssetSource, AssetUris};

/// An asset source backed by a directory of loose files.
///
/// The directory is scanned once when the source is created (see the
/// layout rules in the crate docs); later changes on disk are only picked up
/// by [`rescan`](Self::rescan). Lookups resolve to
/// [`AssetLocation::File`] with an absolute path.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    id: String,
    root: PathBuf,
    assets: BTreeMap<AssetUri, PathBuf>,
}

impl DirectorySource {
    /// Scans `root` and builds a source named `id`.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist, cannot be read, or is not
    /// a directory. Individual unreadable entries are skipped.
    pub fn scan(id: impl Into<String>, root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = fs::canonicalize(root).map_err(|e| SourceError::io(root, e))?;

        let mut source = Self {
            id: id.into(),
            root,
            assets: BTreeMap::new(),
        };
        source.rescan()?;
        Ok(source)
    }

    /// Rebuilds the index from the current content of the root directory.
    ///
    /// On error, the previous index is kept.
    pub fn rescan(&mut self) -> Result<()> {
        let tree = layout::scan_tree(&self.root)?;
        self.assets = tree
            .into_iter()
            .map(|((asset_type, name), path)| {
                (AssetUri::new(asset_type, self.id.clone(), name), path)
            })
            .collect();

        log::debug!(
            "Directory source '{}' indexed {} assets under '{}'",
            self.id,
            self.assets.len(),
            self.root.display()
        );
        Ok(())
    }

    /// The canonical root directory of this source.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of indexed assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if no assets were found.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for DirectorySource {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn get(&self, uri: &AssetUri) -> Option<AssetLocation> {
        self.assets
            .get(uri)
            .map(|path| AssetLocation::File(path.clone()))
    }

    fn list(&self) -> AssetUris<'_> {
        Box::new(self.assets.keys().cloned())
    }
}
