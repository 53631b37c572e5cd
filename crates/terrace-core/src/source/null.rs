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

/// An asset source that knows no assets.
///
/// `get` always returns `None` and both listings are always empty. The
/// registry hands one out when no source is registered for an id, and uses
/// one as the placeholder of a disabled source. It only holds its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullSource {
    id: String,
}

impl NullSource {
    /// Creates an empty source with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl AssetSource for NullSource {
    fn source_id(&self) -> &str {
        &self.id
    }

    fn get(&self, _uri: &AssetUri) -> Option<AssetLocation> {
        None
    }

    fn list(&self) -> AssetUris<'_> {
        Box::new(std::iter::empty())
    }

    fn list_of_type(&self, _asset_type: AssetType) -> AssetUris<'_> {
        Box::new(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_is_kept() {
        for id in ["engine", "", "mods:extra", "ünïcode"] {
            assert_eq!(NullSource::new(id).source_id(), id);
        }
    }

    #[test]
    fn test_get_is_always_absent() {
        let source = NullSource::new("engine");
        for ty in AssetType::all() {
            assert!(source.get(&AssetUri::new(ty, "engine", "anything")).is_none());
            assert!(source.get(&AssetUri::new(ty, "other", "anything")).is_none());
        }
    }

    #[test]
    fn test_list_is_empty_every_time() {
        let source = NullSource::new("engine");
        let mut first = source.list();
        assert!(first.next().is_none());
        assert!(first.next().is_none());
        assert_eq!(source.list().count(), 0);
    }

    #[test]
    fn test_list_of_type_is_empty() {
        let source = NullSource::new("engine");
        for ty in AssetType::all() {
            assert_eq!(source.list_of_type(ty).count(), 0);
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let a = NullSource::new("engine");
        let b = NullSource::new("engine");
        assert_eq!(a, b);
        drop(a);
        assert_eq!(b.source_id(), "engine");
        assert_eq!(b.list().count(), 0);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let source: Box<dyn AssetSource> = Box::new(NullSource::new("disabled"));
        assert_eq!(source.source_id(), "disabled");
        assert_eq!(source.list_of_type(AssetType::Mesh).count(), 0);
    }
}
