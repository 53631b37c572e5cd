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

use anyhow::Result;
use std::fs;
use terrace_core::asset::{AssetLocation, AssetType, AssetUri};
use terrace_io::{build_registry, PackWriter, SourceConfig, SourceKind, SourceManifest};
use tempfile::tempdir;

#[test]
fn test_manifest_mounts_every_kind() -> Result<()> {
    let base = tempdir()?;

    fs::create_dir_all(base.path().join("assets/textures"))?;
    fs::write(base.path().join("assets/textures/grass.png"), b"png")?;

    let mut writer = PackWriter::new();
    writer.add(AssetType::Music, "theme", b"ogg".to_vec())?;
    writer.write(base.path().join("packs/dlc"))?;

    let manifest = SourceManifest {
        sources: vec![
            SourceConfig {
                id: "engine".to_string(),
                kind: SourceKind::Directory,
                path: Some("assets".into()),
            },
            SourceConfig {
                id: "dlc".to_string(),
                kind: SourceKind::Pack,
                path: Some("packs/dlc".into()),
            },
            SourceConfig {
                id: "legacy".to_string(),
                kind: SourceKind::Disabled,
                path: None,
            },
        ],
    };

    let registry = build_registry(&manifest, base.path());
    assert_eq!(registry.source_ids(), vec!["dlc", "engine", "legacy"]);

    let listed: Vec<String> = registry.list().iter().map(|u| u.to_string()).collect();
    assert_eq!(listed, vec!["music:dlc:theme", "texture:engine:grass"]);

    let grass = AssetUri::new(AssetType::Texture, "engine", "grass");
    assert!(matches!(registry.resolve(&grass), Some(AssetLocation::File(_))));

    let theme = AssetUri::new(AssetType::Music, "dlc", "theme");
    assert!(matches!(
        registry.resolve(&theme),
        Some(AssetLocation::Packed { size: 3, .. })
    ));

    // Routing is by source id: the same name in another source is absent.
    let misrouted = AssetUri::new(AssetType::Music, "engine", "theme");
    assert!(registry.resolve(&misrouted).is_none());
    assert!(registry
        .resolve(&AssetUri::new(AssetType::Music, "legacy", "theme"))
        .is_none());

    // Disabling keeps the id but hides its assets.
    assert!(registry.disable("dlc"));
    assert!(registry.resolve(&theme).is_none());
    assert_eq!(registry.list_of_type(AssetType::Music).len(), 0);
    assert_eq!(registry.list_of_type(AssetType::Texture).len(), 1);
    Ok(())
}

#[test]
fn test_last_duplicate_definition_wins() -> Result<()> {
    let base = tempdir()?;
    fs::create_dir_all(base.path().join("first/fonts"))?;
    fs::create_dir_all(base.path().join("second/fonts"))?;
    fs::write(base.path().join("first/fonts/a.fnt"), b"a")?;
    fs::write(base.path().join("second/fonts/b.fnt"), b"b")?;

    let config = |path: &str| SourceConfig {
        id: "engine".to_string(),
        kind: SourceKind::Directory,
        path: Some(path.into()),
    };
    let manifest = SourceManifest {
        sources: vec![config("first"), config("second")],
    };

    let registry = build_registry(&manifest, base.path());
    let names: Vec<String> = registry
        .list_in("engine", AssetType::Font)
        .into_iter()
        .map(|uri| uri.asset_name().to_string())
        .collect();
    assert_eq!(names, vec!["b"]);
    Ok(())
}
