use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::routes;

use crate::settings::ArcSettings;

use super::Route;

const PATH: &str = "/api/info";

pub fn routes() -> Vec<Route> {
    vec![Route::OpenApi(routes!(get))]
}

/// Get information about the service and the shortening backend it talks to
#[utoipa::path(
    method(get),
    path = PATH,
    responses(
        (status = OK, description = "Success", body = inline(GetInfoResponse), content_type = "application/json")
    )
)]
async fn get(State(settings): State<ArcSettings>) -> Json<GetInfoResponse> {
    Json(GetInfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        api_base: settings.api.base_url.to_string(),
    })
}

#[derive(Serialize, ToSchema)]
struct GetInfoResponse {
    name: &'static str,
    version: &'static str,
    build_timestamp: &'static str,
    /// Base address of the shortening service
    api_base: String,
}
