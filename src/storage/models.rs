//! Database models for the promo admin service.
//!
//! These are the row types returned by SQLx queries.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{Banner, SplashScreen};
use crate::error::PromoError;

/// Database row for the banners table.
#[derive(Debug, Clone, FromRow)]
pub struct BannerRow {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub link: String,
    pub section: String,
    pub sort_order: i64,
    pub template: String,
    pub collection_title: String,
    pub collection_image: String,
    pub collection_bg: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<BannerRow> for Banner {
    type Error = PromoError;

    fn try_from(row: BannerRow) -> Result<Self, Self::Error> {
        Ok(Banner {
            id: Uuid::parse_str(&row.id).map_err(|e| PromoError::Internal(e.to_string()))?,
            title: row.title,
            image_url: row.image_url,
            link: row.link,
            section: row.section.parse().map_err(PromoError::Internal)?,
            order: row.sort_order,
            template: row.template,
            collection_title: row.collection_title,
            collection_image: row.collection_image,
            collection_bg: row.collection_bg,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// Database row for the splash_screen table.
#[derive(Debug, Clone, FromRow)]
pub struct SplashScreenRow {
    pub title: String,
    pub media_url: String,
    pub media_type: String,
    pub duration: i64,
    pub background_color: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<SplashScreenRow> for SplashScreen {
    type Error = PromoError;

    fn try_from(row: SplashScreenRow) -> Result<Self, Self::Error> {
        Ok(SplashScreen {
            title: row.title,
            media_url: row.media_url,
            media_type: row.media_type.parse().map_err(PromoError::Internal)?,
            duration: row.duration,
            background_color: row.background_color,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PromoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PromoError::Internal(e.to_string()))
}
