//! HTTP request handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::types::*;
use crate::crm::ContactSubmission;
use crate::domain::{Banner, NewSplashScreen, Section, SplashScreen};
use crate::error::{PromoError, PromoResult};
use crate::AppState;

/// List banners, optionally filtered to one section.
///
/// GET /v1/banners
#[utoipa::path(
    get,
    path = "/v1/banners",
    params(
        ("section" = Option<String>, Query, description = "Filter by section: top, section-1, section-2, section-3")
    ),
    responses(
        (status = 200, description = "Banners sorted ascending by order", body = Vec<Banner>),
        (status = 400, description = "Unknown section value"),
        (status = 500, description = "Internal error")
    ),
    tag = "banners"
)]
pub async fn list_banners(
    State(state): State<AppState>,
    Query(query): Query<ListBannersQuery>,
) -> PromoResult<Json<Vec<Banner>>> {
    let section = query
        .section
        .as_deref()
        .map(|s| s.parse::<Section>().map_err(PromoError::BadRequest))
        .transpose()?;

    let banners = state.repository.list_banners(section).await?;

    Ok(Json(banners))
}

/// Create a banner, applying defaults for every optional field.
///
/// POST /v1/banners
#[utoipa::path(
    post,
    path = "/v1/banners",
    request_body = CreateBannerRequest,
    responses(
        (status = 200, description = "Created banner", body = Banner),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Internal error")
    ),
    tag = "banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(request): Json<CreateBannerRequest>,
) -> PromoResult<Json<Banner>> {
    if request.title.trim().is_empty() {
        return Err(PromoError::BadRequest("title is required".to_string()));
    }
    if request.image_url.trim().is_empty() {
        return Err(PromoError::BadRequest("imageUrl is required".to_string()));
    }

    let banner = Banner::from_new(request.into());
    state.repository.create_banner(&banner).await?;

    tracing::info!(
        banner_id = %banner.id,
        section = %banner.section,
        "Banner created"
    );

    Ok(Json(banner))
}

/// Apply a partial update to a banner.
///
/// PUT /v1/banners/{id}
#[utoipa::path(
    put,
    path = "/v1/banners/{id}",
    params(
        ("id" = Uuid, Path, description = "Banner ID")
    ),
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "Updated banner", body = Banner),
        (status = 404, description = "Banner not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "banners"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBannerRequest>,
) -> PromoResult<Json<Banner>> {
    let banner = state.repository.update_banner(id, &request.into()).await?;

    tracing::info!(banner_id = %id, "Banner updated");

    Ok(Json(banner))
}

/// Delete a banner.
///
/// DELETE /v1/banners/{id}
#[utoipa::path(
    delete,
    path = "/v1/banners/{id}",
    params(
        ("id" = Uuid, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Banner deleted", body = DeleteBannerResponse),
        (status = 404, description = "Banner not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "banners"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> PromoResult<Json<DeleteBannerResponse>> {
    state.repository.delete_banner(id).await?;

    tracing::info!(banner_id = %id, "Banner deleted");

    Ok(Json(DeleteBannerResponse {
        message: "Banner deleted successfully".to_string(),
    }))
}

/// Get the splash screen configuration, or null if none exists.
///
/// GET /v1/splash-screen
#[utoipa::path(
    get,
    path = "/v1/splash-screen",
    responses(
        (status = 200, description = "The configuration, or JSON null when unset", body = SplashScreen),
        (status = 500, description = "Internal error")
    ),
    tag = "splash-screen"
)]
pub async fn get_splash_screen(
    State(state): State<AppState>,
) -> PromoResult<Json<Option<SplashScreen>>> {
    let splash = state.repository.get_splash_screen().await?;

    Ok(Json(splash))
}

/// Create or overwrite the splash screen configuration.
///
/// POST /v1/splash-screen
#[utoipa::path(
    post,
    path = "/v1/splash-screen",
    request_body = UpsertSplashScreenRequest,
    responses(
        (status = 200, description = "Upserted configuration", body = SplashScreen),
        (status = 400, description = "Missing required field or duration below 1"),
        (status = 500, description = "Internal error")
    ),
    tag = "splash-screen"
)]
pub async fn upsert_splash_screen(
    State(state): State<AppState>,
    Json(request): Json<UpsertSplashScreenRequest>,
) -> PromoResult<Json<SplashScreen>> {
    if request.title.trim().is_empty() {
        return Err(PromoError::BadRequest("title is required".to_string()));
    }
    if request.media_url.trim().is_empty() {
        return Err(PromoError::BadRequest("mediaUrl is required".to_string()));
    }

    let new: NewSplashScreen = request.into();
    if new.resolved_duration() < 1 {
        return Err(PromoError::BadRequest(
            "duration must be at least 1 second".to_string(),
        ));
    }

    let splash = SplashScreen::from_new(new);
    let saved = state.repository.upsert_splash_screen(&splash).await?;

    tracing::info!(media_type = %saved.media_type, "Splash screen upserted");

    Ok(Json(saved))
}

/// CORS preflight for the cross-origin contact form.
///
/// OPTIONS /v1/contact-form
pub async fn contact_form_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Relay a contact-form submission into the CRM.
///
/// POST /v1/contact-form
#[utoipa::path(
    post,
    path = "/v1/contact-form",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Person and deal created", body = ContactFormResponse),
        (status = 400, description = "CAPTCHA rejected or missing name/email"),
        (status = 502, description = "CRM or CAPTCHA service failure")
    ),
    tag = "contact-form"
)]
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> PromoResult<Json<ContactFormResponse>> {
    tracing::info!(email = %submission.email, "Contact form received");

    let outcome = state.forwarder.forward(&submission).await?;

    Ok(Json(ContactFormResponse {
        success: true,
        person: outcome.person,
        deal: outcome.deal,
    }))
}

/// Health check endpoint.
///
/// GET /v1/health
#[utoipa::path(
    get,
    path = "/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check database connectivity
    let db_status = match sqlx::query("SELECT 1")
        .fetch_one(state.repository.pool())
        .await
    {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
