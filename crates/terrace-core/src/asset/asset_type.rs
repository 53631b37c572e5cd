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

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The kinds of asset the engine knows how to name.
///
/// Every type carries three pieces of static information:
/// - an `id`, used as the first segment of an [`AssetUri`](super::AssetUri),
/// - a `sub_dir`, the directory that holds assets of this type in
///   file-backed sources,
/// - the file extensions accepted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Entity prefab definitions.
    Prefab,
    /// Short sound effects.
    Sound,
    /// Streamed music tracks.
    Music,
    /// Block shape definitions.
    Shape,
    /// Block definitions.
    #[serde(rename = "blockdef")]
    BlockDefinition,
    /// Static meshes.
    Mesh,
    /// Skinned meshes.
    SkeletalMesh,
    /// Skeletal animations.
    Animation,
    /// Images sampled by materials.
    Texture,
    /// Shader programs.
    Shader,
    /// Material descriptions.
    Material,
    /// Bitmap fonts.
    Font,
}

const ALL_TYPES: [AssetType; 12] = [
    AssetType::Prefab,
    AssetType::Sound,
    AssetType::Music,
    AssetType::Shape,
    AssetType::BlockDefinition,
    AssetType::Mesh,
    AssetType::SkeletalMesh,
    AssetType::Animation,
    AssetType::Texture,
    AssetType::Shader,
    AssetType::Material,
    AssetType::Font,
];

impl AssetType {
    /// Iterates over every asset type in declaration order.
    pub fn all() -> impl Iterator<Item = AssetType> {
        ALL_TYPES.into_iter()
    }

    /// The identifier used in URIs, e.g. `"texture"`.
    pub const fn id(self) -> &'static str {
        match self {
            AssetType::Prefab => "prefab",
            AssetType::Sound => "sound",
            AssetType::Music => "music",
            AssetType::Shape => "shape",
            AssetType::BlockDefinition => "blockdef",
            AssetType::Mesh => "mesh",
            AssetType::SkeletalMesh => "skeletalmesh",
            AssetType::Animation => "animation",
            AssetType::Texture => "texture",
            AssetType::Shader => "shader",
            AssetType::Material => "material",
            AssetType::Font => "font",
        }
    }

    /// The directory holding assets of this type inside a source root.
    pub const fn sub_dir(self) -> &'static str {
        match self {
            AssetType::Prefab => "prefabs",
            AssetType::Sound => "sounds",
            AssetType::Music => "music",
            AssetType::Shape => "shapes",
            AssetType::BlockDefinition => "blocks",
            AssetType::Mesh => "mesh",
            AssetType::SkeletalMesh => "skeletalMesh",
            AssetType::Animation => "animations",
            AssetType::Texture => "textures",
            AssetType::Shader => "shaders",
            AssetType::Material => "materials",
            AssetType::Font => "fonts",
        }
    }

    /// File extensions (without the dot) accepted for this type.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetType::Prefab => &["prefab"],
            AssetType::Sound => &["ogg", "wav"],
            AssetType::Music => &["ogg"],
            AssetType::Shape | AssetType::BlockDefinition => &["json"],
            AssetType::Mesh => &["obj"],
            AssetType::SkeletalMesh => &["md5mesh"],
            AssetType::Animation => &["md5anim"],
            AssetType::Texture => &["png"],
            AssetType::Shader => &["glsl"],
            AssetType::Material => &["mat"],
            AssetType::Font => &["fnt"],
        }
    }

    /// Returns `true` if `extension` (case-insensitive, no dot) is valid for this type.
    pub fn accepts_extension(self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Looks up a type by its URI identifier. Matching is case-insensitive.
    pub fn from_id(id: &str) -> Option<AssetType> {
        Self::all().find(|ty| ty.id().eq_ignore_ascii_case(id))
    }

    /// Looks up a type by the name of the directory that holds it.
    ///
    /// Directory names are matched case-insensitively so that sources laid
    /// out on case-insensitive file systems resolve the same way.
    pub fn from_sub_dir(dir: &str) -> Option<AssetType> {
        Self::all().find(|ty| ty.sub_dir().eq_ignore_ascii_case(dir))
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
