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

use crate::commands::assets_config::{manifest_base_dir, AssetsConfig};
use crate::helpers::*;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use terrace_core::asset::{AssetType, AssetUri};
use terrace_core::registry::AssetSourceRegistry;
use terrace_io::{build_registry, PackSummary, PackWriter};

pub fn pack(manifest_path: &Path, out: Option<PathBuf>) -> Result<()> {
    print_task_start("Packing Assets", ROCKET, MAGENTA);

    let config = AssetsConfig::load(manifest_path)?;
    let base_dir = manifest_base_dir(manifest_path);
    let dest_dir = out.unwrap_or_else(|| base_dir.join(&config.pack.output));

    let valid_source_dirs: Vec<PathBuf> = config
        .pack
        .source_directories
        .iter()
        .map(|dir| base_dir.join(dir))
        .filter(|dir| dir.is_dir())
        .collect();

    if valid_source_dirs.is_empty() {
        print_error("No valid source directories found. Nothing to pack.");
        return Ok(());
    }

    let summary = pack_directories(&valid_source_dirs, &dest_dir)?;
    if summary.entries == 0 {
        print_success("No asset files found to pack.");
        return Ok(());
    }

    print_success(&format!(
        "Wrote {} entries to '{}' ({:.2} KB)",
        summary.entries,
        summary.index_path.display(),
        summary.index_bytes as f64 / 1024.0
    ));
    print_success(&format!(
        "Wrote asset data to '{}' ({:.2} MB)",
        summary.data_path.display(),
        summary.data_bytes as f64 / (1024.0 * 1024.0)
    ));
    Ok(())
}

/// Packs every asset of `source_dirs` into `dest_dir`.
///
/// Later directories override assets of the same type and name found in
/// earlier ones.
pub fn pack_directories(source_dirs: &[PathBuf], dest_dir: &Path) -> Result<PackSummary> {
    let mut writer = PackWriter::new();
    for dir in source_dirs {
        let found = writer
            .add_directory(dir)
            .with_context(|| format!("Failed to scan '{}'", dir.display()))?;
        print_info(&format!("Found {} assets in '{}'", found, dir.display()));
    }

    writer
        .write(dest_dir)
        .with_context(|| format!("Failed to write pack to '{}'", dest_dir.display()))
}

pub fn list(manifest_path: &Path, asset_type: Option<AssetType>, json: bool) -> Result<()> {
    let config = AssetsConfig::load(manifest_path)?;
    let registry = build_registry(&config.manifest, manifest_base_dir(manifest_path));
    let listed = collect_listing(&registry, asset_type);

    if json {
        let text = serde_json::to_string_pretty(&listed).context("Failed to serialize listing")?;
        println!("{text}");
        return Ok(());
    }

    print_task_start("Listing Assets", MAGNIFIER, CYAN);
    for asset in &listed {
        println!(
            "{}{}{} -> {}",
            BOLD,
            asset.uri,
            RESET,
            asset.location.as_deref().unwrap_or("<unresolved>")
        );
    }
    print_success(&format!(
        "{} assets in {} sources",
        listed.len(),
        registry.len()
    ));
    Ok(())
}

/// One row of the `list` output.
#[derive(Debug, Serialize)]
pub struct ListedAsset {
    pub uri: AssetUri,
    pub location: Option<String>,
}

pub fn collect_listing(
    registry: &AssetSourceRegistry,
    asset_type: Option<AssetType>,
) -> Vec<ListedAsset> {
    let uris = match asset_type {
        Some(asset_type) => registry.list_of_type(asset_type),
        None => registry.list(),
    };

    uris.into_iter()
        .map(|uri| ListedAsset {
            location: registry.resolve(&uri).map(|location| location.to_string()),
            uri,
        })
        .collect()
}
