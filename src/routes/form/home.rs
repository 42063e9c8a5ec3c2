use axum::{
    extract::State,
    routing::{get, post},
    Form,
};
use axum_htmx::HxRequest;
use maud::Markup;
use tracing::instrument;

use crate::{
    controller::{FormController, FormState, SubmissionDraft},
    state::SharedApi,
};

use super::{
    page,
    view::{form_view, outcome_view},
    Route,
};

pub const PATH: &str = "/";
pub const SHORTEN_PATH: &str = "/shorten";

pub fn routes() -> Vec<Route> {
    vec![
        Route::Undocumented(PATH, get(get_form)),
        Route::Undocumented(SHORTEN_PATH, post(post_shorten)),
    ]
}

async fn get_form() -> Markup {
    page(form_view(&FormState::default()), None)
}

/// Runs one submission. htmx requests only get the outcome block back.
#[instrument(skip(api))]
async fn post_shorten(
    State(api): State<SharedApi>,
    HxRequest(partial): HxRequest,
    Form(draft): Form<SubmissionDraft>,
) -> Markup {
    let controller = FormController::new(api, draft);
    controller.submit().await;
    let state = controller.snapshot();

    if partial {
        outcome_view(&state)
    } else {
        page(form_view(&state), Some("Result"))
    }
}
