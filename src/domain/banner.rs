//! Banner domain models.
//!
//! A banner is a promotional tile shown in one of four fixed sections of the
//! mobile app. Sections group banners; within a section banners sort ascending
//! by their `order` value (ties unspecified, no uniqueness requirement).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Default background color for collection-style banners.
pub const DEFAULT_COLLECTION_BG: &str = "#f7ed57";

/// Default rendering template.
pub const DEFAULT_TEMPLATE: &str = "template1";

/// A promotional banner tile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Unique identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Image URL for the tile.
    pub image_url: String,
    /// Identifier the app resolves when the tile is tapped.
    pub link: String,
    /// Section the banner belongs to.
    pub section: Section,
    /// Sort key within the section, ascending.
    pub order: i64,
    /// Rendering template name.
    pub template: String,
    /// Title shown on collection-style tiles.
    pub collection_title: String,
    /// Image shown on collection-style tiles.
    pub collection_image: String,
    /// Background color for collection-style tiles.
    pub collection_bg: String,
    /// When the banner was created.
    pub created_at: DateTime<Utc>,
    /// When the banner was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a banner; optional fields take documented
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct NewBanner {
    pub title: String,
    pub image_url: String,
    pub link: Option<String>,
    pub section: Option<Section>,
    pub order: Option<i64>,
    pub template: Option<String>,
    pub collection_title: Option<String>,
    pub collection_image: Option<String>,
    pub collection_bg: Option<String>,
}

impl Banner {
    /// Create a banner from a creation payload, filling in every default.
    pub fn from_new(new: NewBanner) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            image_url: new.image_url,
            link: new.link.unwrap_or_default(),
            section: new.section.unwrap_or_default(),
            order: new.order.unwrap_or(0),
            template: new.template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            collection_title: new.collection_title.unwrap_or_default(),
            collection_image: new.collection_image.unwrap_or_default(),
            collection_bg: new
                .collection_bg
                .unwrap_or_else(|| DEFAULT_COLLECTION_BG.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update to a banner; only populated fields are written.
#[derive(Debug, Clone, Default)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub section: Option<Section>,
    pub order: Option<i64>,
    pub template: Option<String>,
    pub collection_title: Option<String>,
    pub collection_image: Option<String>,
    pub collection_bg: Option<String>,
}

/// One of the four fixed display sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Section {
    #[default]
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "section-1")]
    Section1,
    #[serde(rename = "section-2")]
    Section2,
    #[serde(rename = "section-3")]
    Section3,
}

impl Section {
    /// All known sections, in display order.
    pub const ALL: [Section; 4] = [
        Section::Top,
        Section::Section1,
        Section::Section2,
        Section::Section3,
    ];
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Top => write!(f, "top"),
            Section::Section1 => write!(f, "section-1"),
            Section::Section2 => write!(f, "section-2"),
            Section::Section3 => write!(f, "section-3"),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Section::Top),
            "section-1" => Ok(Section::Section1),
            "section-2" => Ok(Section::Section2),
            "section-3" => Ok(Section::Section3),
            _ => Err(format!(
                "Unknown section '{}'. Must be one of: top, section-1, section-2, section-3",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_create_applies_defaults() {
        let banner = Banner::from_new(NewBanner {
            title: "Sale".to_string(),
            image_url: "https://x/img.png".to_string(),
            ..Default::default()
        });

        assert_eq!(banner.link, "");
        assert_eq!(banner.section, Section::Top);
        assert_eq!(banner.order, 0);
        assert_eq!(banner.template, "template1");
        assert_eq!(banner.collection_title, "");
        assert_eq!(banner.collection_bg, "#f7ed57");
    }

    #[test]
    fn test_create_keeps_provided_fields() {
        let banner = Banner::from_new(NewBanner {
            title: "Sale".to_string(),
            image_url: "https://x/img.png".to_string(),
            section: Some(Section::Section1),
            order: Some(2),
            ..Default::default()
        });

        assert_eq!(banner.section, Section::Section1);
        assert_eq!(banner.order, 2);
    }

    #[test]
    fn test_section_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(&section.to_string()).unwrap(), section);
        }
    }

    #[test]
    fn test_section_rejects_unknown() {
        assert!(Section::from_str("section-4").is_err());
        assert!(Section::from_str("Top").is_err());
    }

    #[test]
    fn test_banner_serializes_camel_case() {
        let banner = Banner::from_new(NewBanner {
            title: "Sale".to_string(),
            image_url: "https://x/img.png".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_value(&banner).unwrap();
        assert_eq!(json["imageUrl"], "https://x/img.png");
        assert_eq!(json["collectionBg"], "#f7ed57");
        assert_eq!(json["section"], "top");
    }
}
