//! Splash screen domain model.
//!
//! The splash screen is the single startup media configuration shown when the
//! mobile app launches. The store holds exactly one row, enforced by a fixed
//! row id at the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default display duration in seconds.
pub const DEFAULT_DURATION_SECS: i64 = 5;

/// Default background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// The startup media configuration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SplashScreen {
    /// Display title.
    pub title: String,
    /// Media URL (image, gif or video).
    pub media_url: String,
    /// Kind of media behind `media_url`.
    pub media_type: MediaType,
    /// Display duration in seconds, at least 1.
    pub duration: i64,
    /// Background color behind the media.
    pub background_color: String,
    /// When the configuration was first created.
    pub created_at: DateTime<Utc>,
    /// When the configuration was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when upserting the splash screen; optional fields take
/// documented defaults.
#[derive(Debug, Clone, Default)]
pub struct NewSplashScreen {
    pub title: String,
    pub media_url: String,
    pub media_type: Option<MediaType>,
    pub duration: Option<i64>,
    pub background_color: Option<String>,
}

impl NewSplashScreen {
    /// Duration after default resolution, before the minimum check.
    pub fn resolved_duration(&self) -> i64 {
        self.duration.unwrap_or(DEFAULT_DURATION_SECS)
    }
}

impl SplashScreen {
    /// Create a configuration from an upsert payload, filling in defaults.
    pub fn from_new(new: NewSplashScreen) -> Self {
        let now = Utc::now();
        Self {
            title: new.title,
            media_url: new.media_url,
            media_type: new.media_type.unwrap_or_default(),
            duration: new.duration.unwrap_or(DEFAULT_DURATION_SECS),
            background_color: new
                .background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Kind of splash media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Gif,
    Video,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Gif => write!(f, "gif"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "gif" => Ok(MediaType::Gif),
            "video" => Ok(MediaType::Video),
            _ => Err(format!(
                "Unknown media type '{}'. Must be one of: image, gif, video",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_applies_defaults() {
        let splash = SplashScreen::from_new(NewSplashScreen {
            title: "Welcome".to_string(),
            media_url: "https://x/splash.png".to_string(),
            ..Default::default()
        });

        assert_eq!(splash.media_type, MediaType::Image);
        assert_eq!(splash.duration, 5);
        assert_eq!(splash.background_color, "#ffffff");
    }

    #[test]
    fn test_from_new_keeps_provided_fields() {
        let splash = SplashScreen::from_new(NewSplashScreen {
            title: "Welcome".to_string(),
            media_url: "https://x/intro.mp4".to_string(),
            media_type: Some(MediaType::Video),
            duration: Some(8),
            background_color: Some("#000000".to_string()),
        });

        assert_eq!(splash.media_type, MediaType::Video);
        assert_eq!(splash.duration, 8);
        assert_eq!(splash.background_color, "#000000");
    }

    #[test]
    fn test_splash_serializes_camel_case() {
        let splash = SplashScreen::from_new(NewSplashScreen {
            title: "Welcome".to_string(),
            media_url: "https://x/splash.png".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_value(&splash).unwrap();
        assert_eq!(json["mediaUrl"], "https://x/splash.png");
        assert_eq!(json["mediaType"], "image");
        assert_eq!(json["backgroundColor"], "#ffffff");
    }

    #[test]
    fn test_resolved_duration() {
        let mut new = NewSplashScreen {
            title: "Welcome".to_string(),
            media_url: "https://x/splash.png".to_string(),
            ..Default::default()
        };
        assert_eq!(new.resolved_duration(), 5);

        new.duration = Some(0);
        assert_eq!(new.resolved_duration(), 0);
    }

    #[test]
    fn test_media_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MediaType::Video).unwrap(),
            "\"video\""
        );
        assert_eq!(
            serde_json::from_str::<MediaType>("\"gif\"").unwrap(),
            MediaType::Gif
        );
    }
}
