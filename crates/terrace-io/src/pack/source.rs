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

use super::{PackIndex, DATA_FILE_NAME, INDEX_FILE_NAME};
use crate::error::{Result, SourceError};
use crate::layout;
use ahash::AHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use terrace_core::asset::{AssetLocation, AssetUri};
use terrace_core::source::{AssetSource, AssetUris};

/// An asset source that serves a pack written by [`PackWriter`](super::PackWriter).
///
/// Only the index is read when the source is opened. Lookups resolve to
/// [`AssetLocation::Packed`] ranges inside `data.pack`, and listings follow
/// the order of the index.
#[derive(Debug, Clone)]
pub struct PackSource {
    id: String,
    pack_path: PathBuf,
    entries: Vec<(AssetUri, u64, u64)>,
    lookup: AHashMap<AssetUri, usize>,
}

impl PackSource {
    /// Opens the pack stored in `dir` as a source named `id`.
    ///
    /// # Errors
    /// Fails if either pack file cannot be read, if the index is invalid,
    /// or if an entry points outside `data.pack`. Entries whose name cannot
    /// appear in a URI are skipped.
    pub fn open(id: impl Into<String>, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let index_path = dir.join(INDEX_FILE_NAME);
        let index_bytes = fs::read(&index_path).map_err(|e| SourceError::io(&index_path, e))?;

        Self::from_index_bytes(id, &index_bytes, dir.join(DATA_FILE_NAME))
    }

    /// Builds a source from index bytes already in memory.
    ///
    /// `pack_path` must point at the matching `data.pack`; its length is
    /// used to validate every entry.
    pub fn from_index_bytes(
        id: impl Into<String>,
        index_bytes: &[u8],
        pack_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let id = id.into();
        let pack_path = pack_path.into();
        let index = PackIndex::from_bytes(index_bytes)?;

        let pack_len = fs::metadata(&pack_path)
            .map_err(|e| SourceError::io(&pack_path, e))?
            .len();

        let mut entries = Vec::with_capacity(index.entries.len());
        let mut lookup = AHashMap::with_capacity(index.entries.len());

        for entry in index.entries {
            let in_bounds = entry
                .offset
                .checked_add(entry.size)
                .is_some_and(|end| end <= pack_len);
            if !in_bounds {
                return Err(SourceError::EntryOutOfBounds {
                    name: entry.name,
                    offset: entry.offset,
                    size: entry.size,
                    pack_len,
                });
            }

            if !layout::is_valid_name(&entry.name) {
                log::warn!("Pack '{id}' has an invalid asset name '{}', skipping it", entry.name);
                continue;
            }

            let uri = AssetUri::new(entry.asset_type, id.clone(), entry.name);
            if lookup.contains_key(&uri) {
                log::warn!("Pack '{id}' lists '{uri}' more than once, keeping the first entry");
                continue;
            }
            lookup.insert(uri.clone(), entries.len());
            entries.push((uri, entry.offset, entry.size));
        }

        log::debug!(
            "Pack source '{id}' opened with {} assets ({} bytes of data)",
            entries.len(),
            pack_len
        );

        Ok(Self {
            id,
            pack_path,
            entries,
            lookup,
        })
    }

    /// Path of the `data.pack` file the locations point into.
    pub fn pack_path(&self) -> &Path {
        &self.pack_path
    }

    /// Returns the number of assets in the pack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pack holds no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetSource for PackSource {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn get(&self, uri: &AssetUri) -> Option<AssetLocation> {
        let (_, offset, size) = &self.entries[*self.lookup.get(uri)?];
        Some(AssetLocation::Packed {
            pack: self.pack_path.clone(),
            offset: *offset,
            size: *size,
        })
    }

    fn list(&self) -> AssetUris<'_> {
        Box::new(self.entries.iter().map(|(uri, _, _)| uri.clone()))
    }
}
