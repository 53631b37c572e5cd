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

use super::{PackEntry, PackIndex, DATA_FILE_NAME, INDEX_FILE_NAME, PACK_VERSION};
use crate::error::{Result, SourceError};
use crate::layout;
use ahash::AHashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use terrace_core::asset::AssetType;

/// Appended to the file names while a pack is being written.
const STAGING_SUFFIX: &str = ".tmp";

enum PendingData {
    Bytes(Vec<u8>),
    File(PathBuf),
}

struct PendingEntry {
    asset_type: AssetType,
    name: String,
    data: PendingData,
}

/// What [`PackWriter::write`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    /// Number of assets written.
    pub entries: usize,
    /// Path of the written index.
    pub index_path: PathBuf,
    /// Size of the index in bytes.
    pub index_bytes: u64,
    /// Path of the written data file.
    pub data_path: PathBuf,
    /// Size of the data file in bytes.
    pub data_bytes: u64,
}

/// Collects assets and writes them out as a pack.
///
/// Entries are written in the order they were first added. Adding an asset
/// whose type and name are already present replaces its data but keeps its
/// position.
#[derive(Default)]
pub struct PackWriter {
    pending: Vec<PendingEntry>,
    positions: AHashMap<(AssetType, String), usize>,
}

impl PackWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset from bytes held in memory.
    ///
    /// Returns `true` if an asset with the same type and name was replaced.
    pub fn add(
        &mut self,
        asset_type: AssetType,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<bool> {
        self.push(asset_type, name.into(), PendingData::Bytes(bytes.into()))
    }

    /// Adds an asset whose bytes are read from `path` when the pack is written.
    pub fn add_file(
        &mut self,
        asset_type: AssetType,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<bool> {
        self.push(asset_type, name.into(), PendingData::File(path.into()))
    }

    /// Adds every asset found under `root`, using the same layout rules as
    /// [`DirectorySource`](crate::DirectorySource).
    ///
    /// Returns the number of assets found.
    pub fn add_directory(&mut self, root: impl AsRef<Path>) -> Result<usize> {
        let tree = layout::scan_tree(root.as_ref())?;
        let found = tree.len();
        for ((asset_type, name), path) in tree {
            if self.add_file(asset_type, name, path)? {
                log::debug!(
                    "Asset from '{}' overrides an earlier entry",
                    root.as_ref().display()
                );
            }
        }
        Ok(found)
    }

    /// Returns the number of assets queued.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Writes `data.pack` and `index.bin` into `dest_dir`, creating it if needed.
    ///
    /// Both files are first written under temporary names and only moved
    /// into place once complete. If writing fails, a pack already present in
    /// `dest_dir` is left untouched.
    pub fn write(&self, dest_dir: impl AsRef<Path>) -> Result<PackSummary> {
        let dest_dir = dest_dir.as_ref();
        fs::create_dir_all(dest_dir).map_err(|e| SourceError::io(dest_dir, e))?;

        let index_path = dest_dir.join(INDEX_FILE_NAME);
        let data_path = dest_dir.join(DATA_FILE_NAME);
        let index_tmp = dest_dir.join(format!("{INDEX_FILE_NAME}{STAGING_SUFFIX}"));
        let data_tmp = dest_dir.join(format!("{DATA_FILE_NAME}{STAGING_SUFFIX}"));

        let (entries, index_bytes, data_bytes) = match self.stage(&data_tmp, &index_tmp) {
            Ok(staged) => staged,
            Err(e) => {
                let _ = fs::remove_file(&data_tmp);
                let _ = fs::remove_file(&index_tmp);
                return Err(e);
            }
        };

        // Without an index the old pack no longer opens, so a failure between
        // the two renames cannot pair an old index with new data.
        match fs::remove_file(&index_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(SourceError::io(&index_path, e)),
        }
        fs::rename(&data_tmp, &data_path).map_err(|e| SourceError::io(&data_path, e))?;
        fs::rename(&index_tmp, &index_path).map_err(|e| SourceError::io(&index_path, e))?;

        log::info!(
            "Wrote pack with {} assets to '{}' ({} bytes of data)",
            entries,
            dest_dir.display(),
            data_bytes
        );

        Ok(PackSummary {
            entries,
            index_path,
            index_bytes,
            data_path,
            data_bytes,
        })
    }

    /// Writes the data and index files at the given staging paths and
    /// returns the entry count, index size and data size.
    fn stage(&self, data_tmp: &Path, index_tmp: &Path) -> Result<(usize, u64, u64)> {
        let data_file = File::create(data_tmp).map_err(|e| SourceError::io(data_tmp, e))?;
        let mut data = BufWriter::new(data_file);

        let mut entries = Vec::with_capacity(self.pending.len());
        let mut offset = 0u64;

        for pending in &self.pending {
            let size = match &pending.data {
                PendingData::Bytes(bytes) => {
                    data.write_all(bytes)
                        .map_err(|e| SourceError::io(data_tmp, e))?;
                    bytes.len() as u64
                }
                PendingData::File(path) => {
                    let mut file = File::open(path).map_err(|e| SourceError::io(path, e))?;
                    io::copy(&mut file, &mut data).map_err(|e| SourceError::io(path, e))?
                }
            };

            entries.push(PackEntry {
                asset_type: pending.asset_type,
                name: pending.name.clone(),
                offset,
                size,
            });
            offset += size;
        }

        data.flush().map_err(|e| SourceError::io(data_tmp, e))?;

        let index = PackIndex {
            version: PACK_VERSION,
            entries,
        };
        let encoded = index.to_bytes()?;
        fs::write(index_tmp, &encoded).map_err(|e| SourceError::io(index_tmp, e))?;

        Ok((index.entries.len(), encoded.len() as u64, offset))
    }

    fn push(&mut self, asset_type: AssetType, name: String, data: PendingData) -> Result<bool> {
        if !layout::is_valid_name(&name) {
            return Err(SourceError::InvalidAssetName(name));
        }

        let key = (asset_type, name);
        if let Some(&position) = self.positions.get(&key) {
            self.pending[position].data = data;
            return Ok(true);
        }

        self.positions.insert(key.clone(), self.pending.len());
        self.pending.push(PendingEntry {
            asset_type,
            name: key.1,
            data,
        });
        Ok(false)
    }
}
