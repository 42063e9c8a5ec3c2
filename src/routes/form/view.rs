use maud::{html, Markup};

use crate::controller::{FormState, Outcome};

use super::home::SHORTEN_PATH;

const OUTCOME_ID: &str = "outcome";
const OUTCOME_TARGET: &str = "#outcome";

pub fn form_view(state: &FormState) -> Markup {
    html! {
        form #shorten-form
            action=(SHORTEN_PATH)
            method="post"
            hx-post=(SHORTEN_PATH)
            hx-target=(OUTCOME_TARGET)
            hx-swap="outerHTML"
            hx-disabled-elt="find button" {
            label {
                div { "URL to shorten" }
                input type="url" name="url" required placeholder="https://example.com" value=(state.draft.url);
            }
            label {
                div { "Custom alias (optional)" }
                input type="text" name="short" placeholder="myid" value=(state.draft.short);
            }
            label {
                div { "Expiry in hours" }
                input type="number" name="expiry" min="1" value=(state.draft.expiry);
            }
            button type="submit" disabled[state.in_flight] {
                @if state.in_flight {
                    "Shortening…"
                } @else {
                    span.idle { "Shorten URL" }
                    span.busy { "Shortening…" }
                }
            }
        }

        (outcome_view(state))
    }
}

/// The error or result block. Empty while idle or in flight.
pub fn outcome_view(state: &FormState) -> Markup {
    html! {
        div id=(OUTCOME_ID) {
            @if !state.in_flight {
                @match &state.outcome {
                    Outcome::None => {}
                    Outcome::Error(message) => {
                        div.error role="alert" { (message) }
                    }
                    Outcome::Success(link) => {
                        div.result {
                            div { strong { "Original:" } " " (link.url) }
                            div {
                                strong { "Short:" } " "
                                a href=(link.short) target="_blank" rel="noreferrer" { (link.short) }
                            }
                            div { strong { "Expires in:" } " " (link.expiry) " hours" }
                            div { strong { "Rate remaining:" } " " (link.rate_limit) }
                            div { strong { "Rate resets in:" } " " (link.rate_limit_reset) " minutes" }
                        }
                    }
                }
            }
        }
    }
}
