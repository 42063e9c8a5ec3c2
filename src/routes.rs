mod api;
mod form;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, MethodRouter},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_axum::router::{OpenApiRouter, UtoipaMethodRouter};
use utoipa_scalar::{Scalar, Servable as _};

use crate::state::AppState;

const OPENAPI_PREFIX: &str = "/apidoc";

#[derive(OpenApi)]
#[openapi()]
struct ApiDoc;

pub fn routes() -> Vec<Route> {
    [api::routes(), form::routes()].concat()
}

#[derive(Clone)]
pub enum Route {
    OpenApi(UtoipaMethodRouter<AppState>),
    Undocumented(&'static str, MethodRouter<AppState>),
}

/// Builds the complete application router, including the API docs.
pub fn router(state: AppState) -> Router {
    let router = routes()
        .into_iter()
        .fold(
            OpenApiRouter::with_openapi(ApiDoc::openapi()),
            |router, route| match route {
                Route::OpenApi(method_router) => router.routes(method_router),
                Route::Undocumented(path, method_router) => router.route(path, method_router),
            },
        );

    let (router, api) = router.with_state(state).split_for_parts();

    router
        .merge(Scalar::with_url(
            format!("{OPENAPI_PREFIX}/scalar"),
            api.clone(),
        ))
        .route(
            &format!("{OPENAPI_PREFIX}/openapi.json"),
            get(move || async move { Json(api) }),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found").into_response() })
}
