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

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the raw bytes of a resolved asset live.
///
/// This is the answer of [`AssetSource::get`](crate::source::AssetSource::get).
/// A location only describes how to reach the data; reading and decoding it
/// is the job of the loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// A standalone file on disk.
    File(PathBuf),
    /// A byte range inside a `data.pack` archive.
    Packed {
        /// Path to the pack data file.
        pack: PathBuf,
        /// Offset of the first byte of the asset.
        offset: u64,
        /// Length of the asset in bytes.
        size: u64,
    },
    /// Bytes held in memory by the source itself.
    Memory(Arc<[u8]>),
}

impl AssetLocation {
    /// The file backing this location, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssetLocation::File(path) => Some(path),
            AssetLocation::Packed { pack, .. } => Some(pack),
            AssetLocation::Memory(_) => None,
        }
    }

    /// The size of the asset in bytes, when known without touching the disk.
    pub fn known_size(&self) -> Option<u64> {
        match self {
            AssetLocation::File(_) => None,
            AssetLocation::Packed { size, .. } => Some(*size),
            AssetLocation::Memory(bytes) => Some(bytes.len() as u64),
        }
    }
}

impl Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetLocation::File(path) => write!(f, "{}", path.display()),
            AssetLocation::Packed { pack, offset, size } => {
                write!(f, "{}@{offset}+{size}", pack.display())
            }
            AssetLocation::Memory(bytes) => write!(f, "<memory: {} bytes>", bytes.len()),
        }
    }
}
