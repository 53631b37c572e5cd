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

use super::AssetType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// Separator between the segments of an [`AssetUri`] text form.
pub const URI_SEPARATOR: char = ':';

/// The immutable identifier of an asset within a named source.
///
/// A URI is made of three parts: the id of the source that provides the
/// asset, the asset's [`AssetType`], and its name within that source. Its
/// text form is `type:source:name`, e.g. `texture:engine:grass`.
///
/// Two URIs are equal when all three fields are equal. The derived ordering
/// compares the source id first, then the type, then the name, which is
/// the enumeration order of sorted sources.
///
/// # Examples
///
/// ```
/// use terrace_core::asset::{AssetType, AssetUri};
///
/// let uri: AssetUri = "texture:engine:grass".parse().unwrap();
/// assert_eq!(uri.asset_type(), AssetType::Texture);
/// assert_eq!(uri.source_id(), "engine");
/// assert_eq!(uri.asset_name(), "grass");
/// assert_eq!(uri.to_string(), "texture:engine:grass");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetUri {
    source_id: String,
    asset_type: AssetType,
    asset_name: String,
}

impl AssetUri {
    /// Creates a URI from its parts.
    pub fn new(
        asset_type: AssetType,
        source_id: impl Into<String>,
        asset_name: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            asset_type,
            asset_name: asset_name.into(),
        }
    }

    /// The id of the source that provides this asset.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// The kind of asset this URI names.
    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// The name of the asset within its source.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Returns `source:name`, the URI without its type segment.
    pub fn simple_name(&self) -> String {
        format!("{}{URI_SEPARATOR}{}", self.source_id, self.asset_name)
    }

    /// Returns `true` if the URI survives a text round trip: both the source
    /// id and the name are non-empty and free of the separator.
    pub fn is_valid(&self) -> bool {
        is_valid_segment(&self.source_id) && is_valid_segment(&self.asset_name)
    }

    /// A UUID (version 5) derived from the text form of this URI.
    ///
    /// Equal URIs always produce the same id, across runs and machines.
    pub fn stable_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_URL, self.to_string().as_bytes())
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(URI_SEPARATOR)
}

impl Display for AssetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{URI_SEPARATOR}{}{URI_SEPARATOR}{}",
            self.asset_type, self.source_id, self.asset_name
        )
    }
}

impl FromStr for AssetUri {
    type Err = UriParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(URI_SEPARATOR).collect();
        let [type_id, source_id, asset_name] = parts.as_slice() else {
            return Err(UriParseError::SegmentCount(parts.len()));
        };

        if type_id.is_empty() || source_id.is_empty() || asset_name.is_empty() {
            return Err(UriParseError::EmptySegment);
        }

        let asset_type = AssetType::from_id(type_id)
            .ok_or_else(|| UriParseError::UnknownType((*type_id).to_string()))?;

        Ok(Self::new(asset_type, *source_id, *asset_name))
    }
}

impl TryFrom<String> for AssetUri {
    type Error = UriParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetUri> for String {
    fn from(uri: AssetUri) -> Self {
        uri.to_string()
    }
}

/// An error returned when parsing the text form of an [`AssetUri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriParseError {
    /// The text did not contain exactly three `:`-separated segments.
    SegmentCount(usize),
    /// One of the segments was empty.
    EmptySegment,
    /// The type segment does not name a known [`AssetType`].
    UnknownType(String),
}

impl Display for UriParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriParseError::SegmentCount(count) => {
                write!(f, "Expected 3 URI segments (type:source:name), found {count}")
            }
            UriParseError::EmptySegment => write!(f, "URI segments must not be empty"),
            UriParseError::UnknownType(id) => write!(f, "Unknown asset type: {id}"),
        }
    }
}

impl std::error::Error for UriParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let uri: AssetUri = "mesh:core:rock".parse().unwrap();
        assert_eq!(uri, AssetUri::new(AssetType::Mesh, "core", "rock"));
        assert_eq!(uri.to_string(), "mesh:core:rock");
        assert_eq!(uri.simple_name(), "core:rock");
    }

    #[test]
    fn test_parse_normalizes_type_case_only() {
        let uri: AssetUri = "Texture:Engine:Grass".parse().unwrap();
        assert_eq!(uri.asset_type(), AssetType::Texture);
        assert_eq!(uri.source_id(), "Engine");
        assert_eq!(uri.asset_name(), "Grass");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            "texture:engine".parse::<AssetUri>(),
            Err(UriParseError::SegmentCount(2))
        );
        assert_eq!(
            "texture:engine:grass:extra".parse::<AssetUri>(),
            Err(UriParseError::SegmentCount(4))
        );
        assert_eq!(
            "texture::grass".parse::<AssetUri>(),
            Err(UriParseError::EmptySegment)
        );
        assert_eq!(
            "sprite:engine:grass".parse::<AssetUri>(),
            Err(UriParseError::UnknownType("sprite".to_string()))
        );
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = AssetUri::new(AssetType::Sound, "engine", "click");
        let b = AssetUri::new(AssetType::Sound, String::from("engine"), "click");
        let c = AssetUri::new(AssetType::Music, "engine", "click");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.stable_id(), b.stable_id());
        assert_ne!(a.stable_id(), c.stable_id());
    }

    #[test]
    fn test_ordering_groups_by_source_first() {
        let mut uris = vec![
            AssetUri::new(AssetType::Texture, "mods", "a"),
            AssetUri::new(AssetType::Texture, "engine", "b"),
            AssetUri::new(AssetType::Prefab, "engine", "z"),
        ];
        uris.sort();
        assert_eq!(
            uris,
            vec![
                AssetUri::new(AssetType::Prefab, "engine", "z"),
                AssetUri::new(AssetType::Texture, "engine", "b"),
                AssetUri::new(AssetType::Texture, "mods", "a"),
            ]
        );
    }

    #[test]
    fn test_validity() {
        assert!(AssetUri::new(AssetType::Font, "engine", "default").is_valid());
        assert!(!AssetUri::new(AssetType::Font, "", "default").is_valid());
        assert!(!AssetUri::new(AssetType::Font, "engine", "a:b").is_valid());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let uri = AssetUri::new(AssetType::Shader, "engine", "sky");
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"shader:engine:sky\"");
        let back: AssetUri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
        assert!(serde_json::from_str::<AssetUri>("\"nope\"").is_err());
    }
}
