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

//! The [`AssetSource`] contract and the sources that need no I/O.
//!
//! An asset source is a pluggable provider that resolves [`AssetUri`]s to
//! [`AssetLocation`]s and enumerates the assets it knows about. Sources are
//! selected by id at registration time (see
//! [`AssetSourceRegistry`](crate::registry::AssetSourceRegistry)) and share
//! no state with each other, only this contract.

mod memory;
mod null;

pub use memory::InMemorySource;
pub use null::NullSource;

use crate::asset::{AssetLocation, AssetType, AssetUri};

/// A lazy, finite sequence of asset URIs produced by [`AssetSource::list`].
pub type AssetUris<'a> = Box<dyn Iterator<Item = AssetUri> + 'a>;

/// A provider of assets, addressed by [`AssetUri`].
///
/// Every operation is total: a missing asset is a `None` or an empty
/// sequence, never an error. This lets callers treat a missing source and a
/// missing asset the same way.
///
/// The supertraits allow a single source to be shared by every thread that
/// resolves assets.
///
/// # Examples
///
/// ```
/// use terrace_core::asset::{AssetType, AssetUri};
/// use terrace_core::source::{AssetSource, NullSource};
///
/// let source = NullSource::new("mods");
/// let uri = AssetUri::new(AssetType::Texture, "mods", "grass");
///
/// assert_eq!(source.source_id(), "mods");
/// assert!(source.get(&uri).is_none());
/// assert_eq!(source.list().count(), 0);
/// ```
pub trait AssetSource: Send + Sync {
    /// The identifier this source was configured with.
    ///
    /// It never changes for the lifetime of the source and matches the id
    /// it is registered under.
    fn source_id(&self) -> &str;

    /// Resolves `uri` to the location of its data.
    ///
    /// Callers route by [`AssetUri::source_id`] beforehand; a URI that
    /// belongs to another source simply resolves to `None`.
    fn get(&self, uri: &AssetUri) -> Option<AssetLocation>;

    /// Enumerates every asset known to this source.
    ///
    /// Each call returns an independent iterator. The order is up to the
    /// source but is the same on every call while the backing data is
    /// unchanged.
    fn list(&self) -> AssetUris<'_>;

    /// Enumerates the assets of a single type.
    fn list_of_type(&self, asset_type: AssetType) -> AssetUris<'_> {
        Box::new(
            self.list()
                .filter(move |uri| uri.asset_type() == asset_type),
        )
    }
}
