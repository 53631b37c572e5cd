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

//! Provides the primitive types used to name and locate assets.
//!
//! This module defines the "common language" shared by every asset source:
//! - [`AssetUri`]: the immutable `type:source:name` identifier of an asset.
//! - [`AssetType`]: the closed set of asset kinds known to the engine.
//! - [`AssetLocation`]: where the bytes of a resolved asset can be read from.
//!
//! None of these types know how an asset is loaded or decoded.

mod asset_type;
mod location;
mod uri;

pub use asset_type::*;
pub use location::*;
pub use uri::*;
