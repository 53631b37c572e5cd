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

//! The on-disk layout shared by directory sources and the pack writer.
//!
//! A source root holds one directory per asset type, named after
//! [`AssetType::sub_dir`]. Inside it, files may be nested freely; the asset
//! name is the file stem and the extension must be one the type accepts:
//!
//! ```text
//! <root>/textures/blocks/grass.png   -> texture:<id>:grass
//! <root>/sounds/click.ogg            -> sound:<id>:click
//! ```

use crate::error::{Result, SourceError};
use std::collections::btree_map::{BTreeMap, Entry};
use std::fs;
use std::path::{Path, PathBuf};
use terrace_core::asset::{AssetType, URI_SEPARATOR};
use walkdir::WalkDir;

/// Assets found in a tree, keyed by type and name.
pub(crate) type AssetTree = BTreeMap<(AssetType, String), PathBuf>;

/// Maps a path relative to a source root to the asset it holds.
///
/// Returns `None` for files directly under the root, files in directories
/// that do not name an asset type, and files with an extension the type
/// does not accept.
pub(crate) fn classify(relative: &Path) -> Option<(AssetType, String)> {
    let mut components = relative.components();
    let type_dir = components.next()?.as_os_str().to_str()?;
    components.next()?;

    let Some(asset_type) = AssetType::from_sub_dir(type_dir) else {
        log::debug!("Skipping '{}': unknown asset directory", relative.display());
        return None;
    };

    let extension = relative.extension()?.to_str()?;
    if !asset_type.accepts_extension(extension) {
        log::debug!(
            "Skipping '{}': '.{extension}' is not a {asset_type} extension",
            relative.display()
        );
        return None;
    }

    let name = relative.file_stem()?.to_str()?;
    is_valid_name(name).then(|| (asset_type, name.to_string()))
}

/// Returns `true` if `name` can be used as the name segment of a URI.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(URI_SEPARATOR)
}

/// Walks `root` and collects every asset it holds.
///
/// The walk is sorted by file name so the result is stable. When two files
/// map to the same type and name, the first one wins.
pub(crate) fn scan_tree(root: &Path) -> Result<AssetTree> {
    let metadata = fs::metadata(root).map_err(|e| SourceError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(SourceError::NotADirectory(root.to_path_buf()));
    }

    let mut tree = AssetTree::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under '{}': {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(key) = classify(relative) else {
            continue;
        };

        match tree.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(entry.into_path());
            }
            Entry::Occupied(slot) => {
                log::warn!(
                    "Duplicate asset '{}' at '{}', keeping '{}'",
                    slot.key().1,
                    entry.path().display(),
                    slot.get().display()
                );
            }
        }
    }

    Ok(tree)
}
