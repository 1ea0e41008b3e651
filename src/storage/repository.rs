//! Repository layer for database operations.

use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::domain::{Banner, BannerPatch, Section, SplashScreen};
use crate::error::{PromoError, PromoResult};
use crate::storage::models::{BannerRow, SplashScreenRow};

/// Repository for all promo admin database operations.
#[derive(Clone)]
pub struct PromoRepository {
    pool: SqlitePool,
}

impl PromoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the database schema.
    ///
    /// The section and media type enums are enforced with CHECK constraints.
    /// The splash_screen table is pinned to a single row via a fixed id.
    pub async fn init_schema(&self) -> PromoResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS banners (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                image_url TEXT NOT NULL,
                link TEXT NOT NULL DEFAULT '',
                section TEXT NOT NULL DEFAULT 'top'
                    CHECK (section IN ('top', 'section-1', 'section-2', 'section-3')),
                sort_order INTEGER NOT NULL DEFAULT 0,
                template TEXT NOT NULL DEFAULT 'template1',
                collection_title TEXT NOT NULL DEFAULT '',
                collection_image TEXT NOT NULL DEFAULT '',
                collection_bg TEXT NOT NULL DEFAULT '#f7ed57',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_banners_section ON banners(section);
            CREATE INDEX IF NOT EXISTS idx_banners_sort_order ON banners(sort_order);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS splash_screen (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                title TEXT NOT NULL,
                media_url TEXT NOT NULL,
                media_type TEXT NOT NULL DEFAULT 'image'
                    CHECK (media_type IN ('image', 'gif', 'video')),
                duration INTEGER NOT NULL DEFAULT 5 CHECK (duration >= 1),
                background_color TEXT NOT NULL DEFAULT '#ffffff',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ==================== Banners ====================

    /// List banners, optionally filtered to one section, ordered ascending
    /// by sort key.
    pub async fn list_banners(&self, section: Option<Section>) -> PromoResult<Vec<Banner>> {
        let rows: Vec<BannerRow> = if let Some(section) = section {
            sqlx::query_as(
                "SELECT * FROM banners WHERE section = ? ORDER BY sort_order ASC",
            )
            .bind(section.to_string())
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as("SELECT * FROM banners ORDER BY sort_order ASC")
                .fetch_all(&self.pool)
                .await?
        };

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    /// Persist a new banner.
    pub async fn create_banner(&self, banner: &Banner) -> PromoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO banners (
                id, title, image_url, link, section, sort_order,
                template, collection_title, collection_image, collection_bg,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(banner.id.to_string())
        .bind(&banner.title)
        .bind(&banner.image_url)
        .bind(&banner.link)
        .bind(banner.section.to_string())
        .bind(banner.order)
        .bind(&banner.template)
        .bind(&banner.collection_title)
        .bind(&banner.collection_image)
        .bind(&banner.collection_bg)
        .bind(banner.created_at.to_rfc3339())
        .bind(banner.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a banner by ID.
    pub async fn get_banner(&self, id: Uuid) -> PromoResult<Banner> {
        let row: BannerRow = sqlx::query_as("SELECT * FROM banners WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PromoError::NotFound(format!("Banner {} not found", id)))?;

        row.try_into()
    }

    /// Apply a partial update to a banner and return the updated document.
    ///
    /// Only fields present in the patch are written. Unknown ids return
    /// NotFound before any column is touched.
    pub async fn update_banner(&self, id: Uuid, patch: &BannerPatch) -> PromoResult<Banner> {
        // Existence check first so a miss performs no mutation.
        self.get_banner(id).await?;

        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(title) = &patch.title {
            sqlx::query("UPDATE banners SET title = ? WHERE id = ?")
                .bind(title)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(image_url) = &patch.image_url {
            sqlx::query("UPDATE banners SET image_url = ? WHERE id = ?")
                .bind(image_url)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(link) = &patch.link {
            sqlx::query("UPDATE banners SET link = ? WHERE id = ?")
                .bind(link)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(section) = patch.section {
            sqlx::query("UPDATE banners SET section = ? WHERE id = ?")
                .bind(section.to_string())
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(order) = patch.order {
            sqlx::query("UPDATE banners SET sort_order = ? WHERE id = ?")
                .bind(order)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(template) = &patch.template {
            sqlx::query("UPDATE banners SET template = ? WHERE id = ?")
                .bind(template)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(collection_title) = &patch.collection_title {
            sqlx::query("UPDATE banners SET collection_title = ? WHERE id = ?")
                .bind(collection_title)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(collection_image) = &patch.collection_image {
            sqlx::query("UPDATE banners SET collection_image = ? WHERE id = ?")
                .bind(collection_image)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(collection_bg) = &patch.collection_bg {
            sqlx::query("UPDATE banners SET collection_bg = ? WHERE id = ?")
                .bind(collection_bg)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        sqlx::query("UPDATE banners SET updated_at = ? WHERE id = ?")
            .bind(&updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        self.get_banner(id).await
    }

    /// Delete a banner.
    pub async fn delete_banner(&self, id: Uuid) -> PromoResult<()> {
        let result = sqlx::query("DELETE FROM banners WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PromoError::NotFound(format!("Banner {} not found", id)));
        }

        Ok(())
    }

    // ==================== Splash screen ====================

    /// Get the splash screen configuration, if one has been saved.
    pub async fn get_splash_screen(&self) -> PromoResult<Option<SplashScreen>> {
        let row: Option<SplashScreenRow> =
            sqlx::query_as("SELECT * FROM splash_screen WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| r.try_into()).transpose()
    }

    /// Create or overwrite the splash screen configuration.
    ///
    /// The table holds one row at id 1; on conflict the mutable fields are
    /// overwritten in place and created_at is preserved.
    pub async fn upsert_splash_screen(&self, splash: &SplashScreen) -> PromoResult<SplashScreen> {
        sqlx::query(
            r#"
            INSERT INTO splash_screen (
                id, title, media_url, media_type, duration, background_color,
                created_at, updated_at
            ) VALUES (1, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                media_url = excluded.media_url,
                media_type = excluded.media_type,
                duration = excluded.duration,
                background_color = excluded.background_color,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&splash.title)
        .bind(&splash.media_url)
        .bind(splash.media_type.to_string())
        .bind(splash.duration)
        .bind(&splash.background_color)
        .bind(splash.created_at.to_rfc3339())
        .bind(splash.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        self.get_splash_screen()
            .await?
            .ok_or_else(|| PromoError::Internal("Splash screen missing after upsert".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaType, NewBanner};

    async fn setup_test_db() -> PromoRepository {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        let repo = PromoRepository::new(pool);
        repo.init_schema().await.expect("Failed to init schema");
        repo
    }

    fn sample_banner(section: Section, order: i64) -> Banner {
        Banner::from_new(NewBanner {
            title: "Sale".to_string(),
            image_url: "https://x/img.png".to_string(),
            section: Some(section),
            order: Some(order),
            ..Default::default()
        })
    }

    fn sample_splash() -> SplashScreen {
        let now = chrono::Utc::now();
        SplashScreen {
            title: "Welcome".to_string(),
            media_url: "https://x/splash.png".to_string(),
            media_type: MediaType::Image,
            duration: 5,
            background_color: "#ffffff".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_banner() {
        let repo = setup_test_db().await;

        let banner = sample_banner(Section::Section1, 2);
        repo.create_banner(&banner).await.unwrap();

        let retrieved = repo.get_banner(banner.id).await.unwrap();
        assert_eq!(retrieved.title, "Sale");
        assert_eq!(retrieved.section, Section::Section1);
        assert_eq!(retrieved.order, 2);
        assert_eq!(retrieved.template, "template1");
        assert_eq!(retrieved.collection_bg, "#f7ed57");
        assert_eq!(retrieved.link, "");
    }

    #[tokio::test]
    async fn test_list_banners_filters_and_sorts() {
        let repo = setup_test_db().await;

        repo.create_banner(&sample_banner(Section::Top, 5)).await.unwrap();
        repo.create_banner(&sample_banner(Section::Section1, 3))
            .await
            .unwrap();
        repo.create_banner(&sample_banner(Section::Section1, 1))
            .await
            .unwrap();

        let all = repo.list_banners(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].order <= w[1].order));

        let filtered = repo.list_banners(Some(Section::Section1)).await.unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|b| b.section == Section::Section1));
        assert_eq!(filtered[0].order, 1);
        assert_eq!(filtered[1].order, 3);
    }

    #[tokio::test]
    async fn test_update_banner_partial() {
        let repo = setup_test_db().await;

        let banner = sample_banner(Section::Top, 0);
        repo.create_banner(&banner).await.unwrap();

        let patch = BannerPatch {
            title: Some("Winter Sale".to_string()),
            order: Some(7),
            ..Default::default()
        };
        let updated = repo.update_banner(banner.id, &patch).await.unwrap();

        assert_eq!(updated.title, "Winter Sale");
        assert_eq!(updated.order, 7);
        // Untouched fields survive a partial update
        assert_eq!(updated.image_url, "https://x/img.png");
        assert_eq!(updated.section, Section::Top);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_banner_is_not_found() {
        let repo = setup_test_db().await;

        let banner = sample_banner(Section::Top, 0);
        repo.create_banner(&banner).await.unwrap();

        let patch = BannerPatch {
            title: Some("Changed".to_string()),
            ..Default::default()
        };
        let result = repo.update_banner(Uuid::new_v4(), &patch).await;
        assert!(matches!(result, Err(PromoError::NotFound(_))));

        // No mutation happened
        let untouched = repo.get_banner(banner.id).await.unwrap();
        assert_eq!(untouched.title, "Sale");
    }

    #[tokio::test]
    async fn test_delete_banner_twice() {
        let repo = setup_test_db().await;

        let banner = sample_banner(Section::Top, 0);
        repo.create_banner(&banner).await.unwrap();

        repo.delete_banner(banner.id).await.unwrap();
        let second = repo.delete_banner(banner.id).await;
        assert!(matches!(second, Err(PromoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_section_check_constraint() {
        let repo = setup_test_db().await;

        let result = sqlx::query(
            r#"
            INSERT INTO banners (id, title, image_url, section, created_at, updated_at)
            VALUES ('x', 't', 'u', 'section-9', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')
            "#,
        )
        .execute(repo.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_splash_duration_check_constraint() {
        let repo = setup_test_db().await;

        let result = sqlx::query(
            r#"
            INSERT INTO splash_screen (id, title, media_url, duration, created_at, updated_at)
            VALUES (1, 't', 'u', 0, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')
            "#,
        )
        .execute(repo.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_splash_screen_starts_empty() {
        let repo = setup_test_db().await;
        assert!(repo.get_splash_screen().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_splash_screen_upsert_is_idempotent() {
        let repo = setup_test_db().await;

        let splash = sample_splash();
        let first = repo.upsert_splash_screen(&splash).await.unwrap();
        let second = repo.upsert_splash_screen(&splash).await.unwrap();

        assert_eq!(second.title, first.title);
        assert_eq!(second.duration, first.duration);
        // Still exactly one row
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM splash_screen")
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_splash_screen_upsert_overwrites_in_place() {
        let repo = setup_test_db().await;

        let splash = sample_splash();
        let created = repo.upsert_splash_screen(&splash).await.unwrap();

        let mut replacement = sample_splash();
        replacement.title = "New Year".to_string();
        replacement.media_type = MediaType::Video;
        replacement.duration = 8;
        let updated = repo.upsert_splash_screen(&replacement).await.unwrap();

        assert_eq!(updated.title, "New Year");
        assert_eq!(updated.media_type, MediaType::Video);
        assert_eq!(updated.duration, 8);
        // created_at is preserved from the first insert
        assert_eq!(
            updated.created_at.timestamp(),
            created.created_at.timestamp()
        );
    }
}
