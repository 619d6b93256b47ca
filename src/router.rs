//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Warband", description = "Warband roster API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User and roster API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::bnet_login))
        .routes(routes!(controller::auth::bnet_callback))
        .routes(routes!(controller::auth::discord_login))
        .routes(routes!(controller::auth::discord_callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::refresh))
        .routes(routes!(controller::user::get_user_characters))
        .routes(routes!(controller::user::set_main, controller::user::get_main))
        .routes(routes!(controller::user::unlink_bnet))
        .routes(routes!(controller::user::unlink_discord))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
