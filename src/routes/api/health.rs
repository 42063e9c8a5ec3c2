use utoipa_axum::routes;

use super::Route;

const PATH: &str = "/api/health";

pub fn routes() -> Vec<Route> {
    vec![Route::OpenApi(routes!(get))]
}

/// Get health of the form service (returns "ok")
#[utoipa::path(
    method(get),
    path = PATH,
    responses(
        (status = OK, description = "Success", body = str, content_type = "text/plain")
    )
)]
async fn get() -> &'static str {
    "ok"
}
