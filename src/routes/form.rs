mod home;
mod styles;
mod view;

use maud::{html, Markup, Render, DOCTYPE};

use super::Route;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

pub fn routes() -> Vec<Route> {
    [styles::routes(), home::routes()].concat()
}

fn page(content: impl Render, title: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta charset="utf-8";

                title { "URL Shortener" @if let Some(title) = title { " - " (title) } }

                link rel="stylesheet" href=(styles::PATH);
                script src=(HTMX_SRC) {}
            }

            body {
                main {
                    h1 { "URL Shortener" }
                    (content)
                }

                footer {
                    a href="/apidoc/scalar" {
                        "API documentation"
                    }

                    span #version {
                        (env!("CARGO_PKG_NAME")) " " (env!("CARGO_PKG_VERSION"))
                    }
                }
            }
        }
    }
}
