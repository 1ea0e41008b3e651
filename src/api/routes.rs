//! Route definitions for the API.

use axum::{
    routing::{get, options, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_banners,
        handlers::create_banner,
        handlers::update_banner,
        handlers::delete_banner,
        handlers::get_splash_screen,
        handlers::upsert_splash_screen,
        handlers::submit_contact_form,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::ListBannersQuery,
        crate::api::types::CreateBannerRequest,
        crate::api::types::UpdateBannerRequest,
        crate::api::types::DeleteBannerResponse,
        crate::api::types::UpsertSplashScreenRequest,
        crate::api::types::ContactFormResponse,
        crate::api::types::HealthResponse,
        crate::crm::ContactSubmission,
        crate::domain::Banner,
        crate::domain::Section,
        crate::domain::SplashScreen,
        crate::domain::MediaType,
    )),
    tags(
        (name = "banners", description = "Banner management endpoints"),
        (name = "splash-screen", description = "Splash screen singleton endpoints"),
        (name = "contact-form", description = "Contact-form CRM relay"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Promo Admin API",
        version = "0.1.0",
        description = "Admin API for mobile app marketing content - banners, splash screen and contact-form relay",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Every response carries permissive CORS headers so the admin UI and the
/// public website form can call from other origins.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Banners
        .route(
            "/v1/banners",
            get(handlers::list_banners).post(handlers::create_banner),
        )
        .route(
            "/v1/banners/{id}",
            put(handlers::update_banner).delete(handlers::delete_banner),
        )
        // Splash screen
        .route(
            "/v1/splash-screen",
            get(handlers::get_splash_screen).post(handlers::upsert_splash_screen),
        )
        // Contact form (explicit route for bare OPTIONS probes)
        .route(
            "/v1/contact-form",
            options(handlers::contact_form_preflight).post(handlers::submit_contact_form),
        )
        // Health
        .route("/v1/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
