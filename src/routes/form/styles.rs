use axum::routing::get;
use axum_extra::response::Css;

use super::Route;

pub const PATH: &str = "/styles.css";

pub fn routes() -> Vec<Route> {
    vec![Route::Undocumented(PATH, get(get_styles))]
}

async fn get_styles() -> Css<&'static str> {
    Css(include_str!("styles.css"))
}
