use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Position given to a freshly uploaded photo so it sorts ahead of the curated ones.
pub const NEW_PHOTO_POSITION: i32 = -1;
/// Position given to a freshly uploaded variant so it sorts after existing ones.
pub const NEW_VARIANT_POSITION: i32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTag {
    Portfolio,
    Portraits,
    Weddings,
    About,
    Articles,
    Reportage,
}

impl GalleryTag {
    pub const ALL: [GalleryTag; 6] = [
        GalleryTag::Portfolio,
        GalleryTag::Portraits,
        GalleryTag::Weddings,
        GalleryTag::About,
        GalleryTag::Articles,
        GalleryTag::Reportage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryTag::Portfolio => "portfolio",
            GalleryTag::Portraits => "portraits",
            GalleryTag::Weddings => "weddings",
            GalleryTag::About => "about",
            GalleryTag::Articles => "articles",
            GalleryTag::Reportage => "reportage",
        }
    }

    /// Media-host tag under which variants of this gallery are uploaded.
    pub fn variant_tag(&self) -> String {
        format!("{}_variant", self.as_str())
    }
}

impl fmt::Display for GalleryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gallery tag: {0}")]
pub struct UnknownTagError(pub String);

impl FromStr for GalleryTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        GalleryTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == needle)
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Id must not be empty")]
pub struct EmptyIdError;

/// Trims a photo or variant id, rejecting blank input.
pub fn non_blank_id(raw: &str) -> Result<String, EmptyIdError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(EmptyIdError);
    }
    Ok(id.to_string())
}

/// Asset as listed by the media host for a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    pub public_id: String,
    pub format: String,
    /// Delivery URL resolved by the listing adapter.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhotoVariant {
    pub id: String,
    pub url: String,
    pub position: i32,
}

/// Persisted curation entry with its variants and optional description attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedPhoto {
    pub id: String,
    pub tag: GalleryTag,
    pub position: i32,
    pub url: String,
    pub variants: Vec<PhotoVariant>,
    pub description: Option<String>,
}

/// One photo of a resolved gallery, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GalleryPhoto {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub description: String,
    pub variants: Vec<PhotoVariant>,
}

/// Result of a successful upload to the media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub public_id: String,
    pub secure_url: String,
}
