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

//! Error types for file-backed sources.

use std::path::{Path, PathBuf};

/// Result type alias for source construction.
pub type Result<T, E = SourceError> = std::result::Result<T, E>;

/// Errors raised while opening, scanning or writing a file-backed source.
///
/// Once a source is built, its lookups never fail; these errors only occur
/// at construction time.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A file system operation failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A directory source root exists but is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The pack index could not be decoded.
    #[error("failed to decode pack index: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The pack index could not be encoded.
    #[error("failed to encode pack index: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The pack was written with a format version this build cannot read.
    #[error("unsupported pack version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the index.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// An index entry points past the end of `data.pack`.
    #[error("pack entry '{name}' ({offset}+{size}) exceeds the pack length of {pack_len} bytes")]
    EntryOutOfBounds {
        /// Name of the offending entry.
        name: String,
        /// Offset recorded in the index.
        offset: u64,
        /// Size recorded in the index.
        size: u64,
        /// Actual length of the data file.
        pack_len: u64,
    },

    /// An asset name cannot be used in a URI.
    #[error("invalid asset name '{0}'")]
    InvalidAssetName(String),

    /// A manifest entry needs a path but has none.
    #[error("source '{0}' requires a path")]
    MissingPath(String),
}

impl SourceError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
