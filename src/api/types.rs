//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{BannerPatch, MediaType, NewBanner, NewSplashScreen, Section};

// ==================== Banners ====================

/// Query parameters for listing banners.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListBannersQuery {
    /// Filter to one section.
    #[serde(default)]
    pub section: Option<String>,
}

/// Request to create a banner. Optional fields take documented defaults.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub collection_title: Option<String>,
    #[serde(default)]
    pub collection_image: Option<String>,
    #[serde(default)]
    pub collection_bg: Option<String>,
}

impl From<CreateBannerRequest> for NewBanner {
    fn from(req: CreateBannerRequest) -> Self {
        NewBanner {
            title: req.title,
            image_url: req.image_url,
            link: req.link,
            section: req.section,
            order: req.order,
            template: req.template,
            collection_title: req.collection_title,
            collection_image: req.collection_image,
            collection_bg: req.collection_bg,
        }
    }
}

/// Partial update to a banner; absent fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub collection_title: Option<String>,
    #[serde(default)]
    pub collection_image: Option<String>,
    #[serde(default)]
    pub collection_bg: Option<String>,
}

impl From<UpdateBannerRequest> for BannerPatch {
    fn from(req: UpdateBannerRequest) -> Self {
        BannerPatch {
            title: req.title,
            image_url: req.image_url,
            link: req.link,
            section: req.section,
            order: req.order,
            template: req.template,
            collection_title: req.collection_title,
            collection_image: req.collection_image,
            collection_bg: req.collection_bg,
        }
    }
}

/// Confirmation body for banner deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteBannerResponse {
    /// Confirmation message.
    pub message: String,
}

// ==================== Splash screen ====================

/// Request to upsert the splash screen configuration.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSplashScreenRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub background_color: Option<String>,
}

impl From<UpsertSplashScreenRequest> for NewSplashScreen {
    fn from(req: UpsertSplashScreenRequest) -> Self {
        NewSplashScreen {
            title: req.title,
            media_url: req.media_url,
            media_type: req.media_type,
            duration: req.duration,
            background_color: req.background_color,
        }
    }
}

// ==================== Contact form ====================

/// Response after a successful contact-form relay.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactFormResponse {
    /// Always true on success.
    pub success: bool,
    /// The created CRM person record.
    pub person: Value,
    /// The created CRM deal record.
    pub deal: Value,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// Timestamp.
    pub timestamp: String,
}
