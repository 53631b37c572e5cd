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

//! # Terrace IO
//!
//! Concrete [`AssetSource`](terrace_core::AssetSource) implementations that
//! read from the file system:
//! - [`DirectorySource`]: a tree of loose files sorted by asset type.
//! - [`PackSource`]: a packed archive (`index.bin` + `data.pack`) written by
//!   [`PackWriter`].
//!
//! The [`manifest`] module builds a whole
//! [`AssetSourceRegistry`](terrace_core::AssetSourceRegistry) from a
//! declarative list of sources.

#![warn(missing_docs)]

mod directory;
mod error;
mod layout;
pub mod manifest;
pub mod pack;

pub use directory::DirectorySource;
pub use error::{Result, SourceError};
pub use manifest::{build_registry, SourceConfig, SourceKind, SourceManifest};
pub use pack::{PackSource, PackSummary, PackWriter};
