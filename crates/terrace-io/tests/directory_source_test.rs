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
use std::path::Path;
use terrace_core::asset::{AssetLocation, AssetType, AssetUri};
use terrace_core::source::AssetSource;
use terrace_io::{DirectorySource, SourceError};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, contents: &[u8]) -> Result<()> {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(path, contents)?;
    Ok(())
}

#[test]
fn test_scan_follows_type_directories() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "textures/grass.png", b"png")?;
    write(dir.path(), "textures/blocks/stone.png", b"png")?;
    write(dir.path(), "sounds/click.ogg", b"ogg")?;
    write(dir.path(), "shaders/sky.glsl", b"void main() {}")?;
    // Ignored: wrong extension, unknown directory, file at the root.
    write(dir.path(), "textures/notes.txt", b"")?;
    write(dir.path(), "docs/grass.png", b"")?;
    write(dir.path(), "readme.png", b"")?;

    let source = DirectorySource::scan("engine", dir.path())?;

    let listed: Vec<String> = source.list().map(|uri| uri.to_string()).collect();
    assert_eq!(
        listed,
        vec![
            "sound:engine:click",
            "texture:engine:grass",
            "texture:engine:stone",
            "shader:engine:sky",
        ]
    );
    assert_eq!(source.len(), 4);
    assert_eq!(source.list_of_type(AssetType::Texture).count(), 2);
    assert_eq!(source.list_of_type(AssetType::Font).count(), 0);

    let uri = AssetUri::new(AssetType::Texture, "engine", "stone");
    let expected = fs::canonicalize(dir.path().join("textures/blocks/stone.png"))?;
    assert_eq!(source.get(&uri), Some(AssetLocation::File(expected)));
    Ok(())
}

#[test]
fn test_unknown_assets_are_absent() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "textures/grass.png", b"png")?;
    let source = DirectorySource::scan("engine", dir.path())?;

    assert!(source
        .get(&AssetUri::new(AssetType::Texture, "engine", "lava"))
        .is_none());
    assert!(source
        .get(&AssetUri::new(AssetType::Texture, "mods", "grass"))
        .is_none());
    assert!(source
        .get(&AssetUri::new(AssetType::Material, "engine", "grass"))
        .is_none());
    Ok(())
}

#[test]
fn test_duplicate_names_keep_the_first_file() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "textures/a/grass.png", b"first")?;
    write(dir.path(), "textures/b/grass.png", b"second")?;

    let source = DirectorySource::scan("engine", dir.path())?;
    assert_eq!(source.len(), 1);

    let uri = AssetUri::new(AssetType::Texture, "engine", "grass");
    let location = source.get(&uri).expect("grass should resolve");
    assert!(location.path().unwrap().ends_with("a/grass.png"));
    Ok(())
}

#[test]
fn test_rescan_picks_up_changes() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "fonts/default.fnt", b"font")?;
    let mut source = DirectorySource::scan("engine", dir.path())?;
    assert_eq!(source.len(), 1);

    write(dir.path(), "fonts/mono.fnt", b"font")?;
    assert_eq!(source.len(), 1);
    source.rescan()?;
    assert_eq!(source.len(), 2);
    Ok(())
}

#[test]
fn test_listing_is_deterministic() -> Result<()> {
    let dir = tempdir()?;
    for name in ["c", "a", "b"] {
        write(dir.path(), &format!("prefabs/{name}.prefab"), b"{}")?;
    }
    let source = DirectorySource::scan("engine", dir.path())?;
    let first: Vec<_> = source.list().collect();
    let second: Vec<_> = source.list().collect();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(AssetUri::asset_name).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    Ok(())
}

#[test]
fn test_invalid_roots_are_rejected() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing");
    assert!(matches!(
        DirectorySource::scan("engine", &missing),
        Err(SourceError::Io { .. })
    ));

    let file = dir.path().join("file.png");
    fs::write(&file, b"png")?;
    assert!(matches!(
        DirectorySource::scan("engine", &file),
        Err(SourceError::NotADirectory(_))
    ));
    Ok(())
}
