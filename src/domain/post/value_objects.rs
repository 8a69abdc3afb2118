use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl From<PostId> for Uuid {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown post status: {other}"
            ))),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL-safe identifier in canonical kebab-case form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Normalize arbitrary text into a slug: lowercase, fold diacritics,
    /// drop symbols, collapse whitespace and repeated hyphens, trim.
    pub fn from_text(text: &str) -> DomainResult<Self> {
        let normalized = slug::slugify(text);
        if normalized.is_empty() {
            return Err(DomainError::InvalidSlug(text.to_owned()));
        }
        debug_assert!(Self::is_canonical(&normalized));
        Ok(Self(normalized))
    }

    /// Accept only text that is already in canonical form. Used when
    /// rehydrating stored rows, where normalization would hide corruption.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if Self::is_canonical(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidSlug(value))
        }
    }

    pub fn is_canonical(value: &str) -> bool {
        !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Optional SEO metadata attached to a post. Each field stands alone;
/// "complete" only means title and description are both present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoMeta {
    title: Option<String>,
    description: Option<String>,
    og_image_url: Option<String>,
    canonical_url: Option<String>,
}

impl SeoMeta {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        og_image_url: Option<String>,
        canonical_url: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            og_image_url,
            canonical_url,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn og_image_url(&self) -> Option<&str> {
        self.og_image_url.as_deref()
    }

    pub fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some()
    }

    // No fallback chain: Open Graph fields mirror title/description as-is.
    pub fn og_title(&self) -> Option<&str> {
        self.title()
    }

    pub fn og_description(&self) -> Option<&str> {
        self.description()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.og_image_url.is_none()
            && self.canonical_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub Uuid);

impl From<TagId> for Uuid {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Tag reference carried by a post. Tags are owned by the store's tag
/// table; slug uniqueness is enforced there, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: Slug,
}
