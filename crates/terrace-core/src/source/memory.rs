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

use super::{AssetSource, AssetUris};
use crate::asset::{AssetLocation, AssetType, AssetUri};
use std::collections::BTreeMap;
use std::sync::Arc;

/// An asset source backed by byte buffers registered in code.
///
/// Useful for builtin assets compiled into the binary and for tests. Assets
/// are enumerated in [`AssetUri`] order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    id: String,
    assets: BTreeMap<AssetUri, Arc<[u8]>>,
}

impl InMemorySource {
    /// Creates an empty in-memory source.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assets: BTreeMap::new(),
        }
    }

    /// Adds an asset, returning the bytes it replaced if the name was taken.
    pub fn insert(
        &mut self,
        asset_type: AssetType,
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Option<Arc<[u8]>> {
        let uri = AssetUri::new(asset_type, self.id.clone(), name);
        self.assets.insert(uri, bytes.into())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(
        mut self,
        asset_type: AssetType,
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        self.insert(asset_type, name, bytes);
        self
    }

    /// Removes an asset, returning its bytes.
    pub fn remove(&mut self, uri: &AssetUri) -> Option<Arc<[u8]>> {
        self.assets.remove(uri)
    }

    /// Returns the number of assets held.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the source holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for InMemorySource {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn get(&self, uri: &AssetUri) -> Option<AssetLocation> {
        self.assets
            .get(uri)
            .map(|bytes| AssetLocation::Memory(bytes.clone()))
    }

    fn list(&self) -> AssetUris<'_> {
        Box::new(self.assets.keys().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemorySource {
        InMemorySource::new("builtin")
            .with(AssetType::Texture, "white", vec![255u8; 4])
            .with(AssetType::Shader, "default", &b"void main() {}"[..])
            .with(AssetType::Texture, "black", vec![0u8; 4])
    }

    #[test]
    fn test_get_resolves_to_memory() {
        let source = sample();
        let uri = AssetUri::new(AssetType::Texture, "builtin", "white");
        match source.get(&uri) {
            Some(AssetLocation::Memory(bytes)) => assert_eq!(&*bytes, &[255u8; 4]),
            other => panic!("unexpected location: {other:?}"),
        }
    }

    #[test]
    fn test_foreign_uri_is_absent() {
        let source = sample();
        let uri = AssetUri::new(AssetType::Texture, "engine", "white");
        assert!(source.get(&uri).is_none());
    }

    #[test]
    fn test_list_is_sorted_and_restartable() {
        let source = sample();
        let first: Vec<_> = source.list().collect();
        let second: Vec<_> = source.list().collect();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|u| u.to_string()).collect::<Vec<_>>(),
            vec![
                "texture:builtin:black",
                "texture:builtin:white",
                "shader:builtin:default",
            ]
        );
    }

    #[test]
    fn test_list_of_type_filters() {
        let source = sample();
        let textures: Vec<_> = source.list_of_type(AssetType::Texture).collect();
        assert_eq!(textures.len(), 2);
        assert!(textures
            .iter()
            .all(|uri| uri.asset_type() == AssetType::Texture));
        assert_eq!(source.list_of_type(AssetType::Music).count(), 0);
    }

    #[test]
    fn test_insert_replaces() {
        let mut source = sample();
        let previous = source.insert(AssetType::Texture, "white", vec![1u8]);
        assert_eq!(previous.as_deref(), Some(&[255u8; 4][..]));
        assert_eq!(source.len(), 3);

        let uri = AssetUri::new(AssetType::Texture, "builtin", "white");
        assert!(source.remove(&uri).is_some());
        assert!(source.get(&uri).is_none());
        assert_eq!(source.len(), 2);
    }
}
