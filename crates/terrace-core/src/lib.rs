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

//! # Terrace Core
//!
//! Foundational crate containing the asset identifiers, the [`AssetSource`]
//! contract every asset provider implements, and the registry that routes
//! lookups to the right source by id.
//!
//! This crate performs no I/O. File-backed sources live in `terrace-io`.

#![warn(missing_docs)]

pub mod asset;
pub mod registry;
pub mod source;

pub use asset::{AssetLocation, AssetType, AssetUri, UriParseError};
pub use registry::AssetSourceRegistry;
pub use source::{AssetSource, AssetUris, InMemorySource, NullSource};
