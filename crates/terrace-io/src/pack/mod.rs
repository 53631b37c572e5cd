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

//! Packed asset archives.
//!
//! A pack is a directory holding two files:
//! - `data.pack`: the raw bytes of every asset, concatenated.
//! - `index.bin`: a bincode-encoded [`PackIndex`] locating each asset as an
//!   `(offset, size)` range inside `data.pack`.
//!
//! [`PackWriter`] produces packs and [`PackSource`] serves them.

mod source;
mod writer;

pub use source::PackSource;
pub use writer::{PackSummary, PackWriter};

use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};
use terrace_core::asset::AssetType;

/// File name of the pack index inside a pack directory.
pub const INDEX_FILE_NAME: &str = "index.bin";

/// File name of the pack data inside a pack directory.
pub const DATA_FILE_NAME: &str = "data.pack";

/// Format version written by this build.
pub const PACK_VERSION: u32 = 1;

/// The runtime representation of `index.bin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackIndex {
    /// Format version, see [`PACK_VERSION`].
    pub version: u32,
    /// One entry per asset, in the order they were written.
    pub entries: Vec<PackEntry>,
}

/// The location of one asset inside `data.pack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackEntry {
    /// Kind of the asset.
    pub asset_type: AssetType,
    /// Name of the asset, without source id.
    pub name: String,
    /// Offset of the first byte in `data.pack`.
    pub offset: u64,
    /// Length in bytes.
    pub size: u64,
}

impl PackIndex {
    /// Encodes the index with bincode's standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard();
        Ok(bincode::serde::encode_to_vec(self, config)?)
    }

    /// Decodes an index and checks that its version is supported.
    ///
    /// # Errors
    /// Returns [`SourceError::Decode`] if the bytes are not a valid index and
    /// [`SourceError::UnsupportedVersion`] if it was written by another
    /// format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard();
        let (index, _): (PackIndex, _) = bincode::serde::decode_from_slice(bytes, config)?;

        if index.version != PACK_VERSION {
            return Err(SourceError::UnsupportedVersion {
                found: index.version,
                expected: PACK_VERSION,
            });
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_other_versions() {
        let index = PackIndex {
            version: PACK_VERSION + 1,
            entries: Vec::new(),
        };
        let bytes = index.to_bytes().unwrap();
        assert!(matches!(
            PackIndex::from_bytes(&bytes),
            Err(SourceError::UnsupportedVersion { found, .. }) if found == PACK_VERSION + 1
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            PackIndex::from_bytes(&[0xff, 0xff, 0xff]),
            Err(SourceError::Decode(_))
        ));
    }
}
