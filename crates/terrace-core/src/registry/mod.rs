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

//! A registry that maps source ids to [`AssetSource`]s and routes lookups.
//!
//! The [`AssetSourceRegistry`] is the single entry point asset consumers use
//! to resolve an [`AssetUri`]: it picks the source named by
//! [`AssetUri::source_id`] and forwards the call. An id with no registered
//! source behaves like a [`NullSource`], so lookups never fail.
//!
//! # Concurrency
//!
//! The registry is read-mostly. The map lives behind an `Arc` that readers
//! clone under a short read lock and then use without holding any lock.
//! Writers copy the map only while a reader still holds an older snapshot
//! (`Arc::make_mut`), mutate it, and publish it in place.

use crate::asset::{AssetLocation, AssetType, AssetUri};
use crate::source::{AssetSource, NullSource};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type SourceMap = BTreeMap<String, Arc<dyn AssetSource>>;

/// A thread-safe map from source id to [`AssetSource`].
///
/// # Example
///
/// ```rust
/// use terrace_core::asset::{AssetType, AssetUri};
/// use terrace_core::registry::AssetSourceRegistry;
/// use terrace_core::source::InMemorySource;
///
/// let registry = AssetSourceRegistry::new();
/// registry.register(InMemorySource::new("engine").with(AssetType::Font, "default", vec![0u8]));
///
/// let uri = AssetUri::new(AssetType::Font, "engine", "default");
/// assert!(registry.resolve(&uri).is_some());
///
/// // Unknown sources resolve nothing instead of failing.
/// let missing = AssetUri::new(AssetType::Font, "mods", "default");
/// assert!(registry.resolve(&missing).is_none());
/// ```
#[derive(Default)]
pub struct AssetSourceRegistry {
    sources: RwLock<Arc<SourceMap>>,
}

impl AssetSourceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: RwLock::new(Arc::new(BTreeMap::new())),
        }
    }

    /// Registers a source under its own [`AssetSource::source_id`].
    ///
    /// If a source with the same id was already registered, it is replaced
    /// and returned.
    pub fn register<S: AssetSource + 'static>(&self, source: S) -> Option<Arc<dyn AssetSource>> {
        self.register_shared(Arc::new(source))
    }

    /// Same as [`register`](Self::register) for a source that is already shared.
    pub fn register_shared(&self, source: Arc<dyn AssetSource>) -> Option<Arc<dyn AssetSource>> {
        let id = source.source_id().to_string();
        let previous = self.update(|map| map.insert(id.clone(), source));
        match &previous {
            Some(_) => log::info!("Replaced asset source '{id}'"),
            None => log::debug!("Registered asset source '{id}'"),
        }
        previous
    }

    /// Removes the source registered under `id` and returns it.
    pub fn unregister(&self, id: &str) -> Option<Arc<dyn AssetSource>> {
        let removed = self.update(|map| map.remove(id));
        if removed.is_some() {
            log::debug!("Unregistered asset source '{id}'");
        }
        removed
    }

    /// Swaps the source registered under `id` for a [`NullSource`] placeholder.
    ///
    /// The id stays registered, but resolves and lists nothing until a real
    /// source is registered again. Returns `false` if `id` was not registered.
    pub fn disable(&self, id: &str) -> bool {
        let disabled = self.update(|map| match map.get_mut(id) {
            Some(slot) => {
                *slot = Arc::new(NullSource::new(id));
                true
            }
            None => false,
        });
        if disabled {
            log::info!("Disabled asset source '{id}'");
        }
        disabled
    }

    /// Returns the source registered under `id`.
    ///
    /// When nothing is registered, a fresh [`NullSource`] carrying `id` is
    /// returned instead, so the result can always be queried.
    #[must_use]
    pub fn source(&self, id: &str) -> Arc<dyn AssetSource> {
        match self.snapshot().get(id) {
            Some(source) => source.clone(),
            None => {
                log::trace!("No asset source registered for '{id}', using a null source");
                Arc::new(NullSource::new(id))
            }
        }
    }

    /// Returns `true` if a source is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().contains_key(id)
    }

    /// The ids of every registered source, sorted.
    #[must_use]
    pub fn source_ids(&self) -> Vec<String> {
        self.snapshot().keys().cloned().collect()
    }

    /// Returns the number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns `true` if no sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Removes every registered source.
    pub fn clear(&self) {
        self.update(BTreeMap::clear);
    }

    /// Resolves `uri` through the source named by its source id.
    #[must_use]
    pub fn resolve(&self, uri: &AssetUri) -> Option<AssetLocation> {
        self.source(uri.source_id()).get(uri)
    }

    /// Every asset of every source. Sources are visited in id order.
    #[must_use]
    pub fn list(&self) -> Vec<AssetUri> {
        self.snapshot()
            .values()
            .flat_map(|source| source.list())
            .collect()
    }

    /// Every asset of the given type across all sources, in id order.
    #[must_use]
    pub fn list_of_type(&self, asset_type: AssetType) -> Vec<AssetUri> {
        self.snapshot()
            .values()
            .flat_map(|source| source.list_of_type(asset_type))
            .collect()
    }

    /// The assets of one type in a single source.
    #[must_use]
    pub fn list_in(&self, id: &str, asset_type: AssetType) -> Vec<AssetUri> {
        self.source(id).list_of_type(asset_type).collect()
    }

    fn snapshot(&self) -> Arc<SourceMap> {
        self.sources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // The map is only ever replaced whole, so a poisoned lock still guards
    // a consistent value.
    fn update<R>(&self, f: impl FnOnce(&mut SourceMap) -> R) -> R {
        let mut guard = self
            .sources
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(Arc::make_mut(&mut guard))
    }
}

impl fmt::Debug for AssetSourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetSourceRegistry")
            .field("sources", &self.source_ids())
            .finish()
    }
}
