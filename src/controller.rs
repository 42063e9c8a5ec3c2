//! The shortening form controller.
//!
//! A [`FormController`] owns the state of one form: the draft being edited,
//! whether a submission is in flight and the outcome of the last submission.
//! Every mutation is published on a watch channel so a view can be redrawn
//! from [`FormState`] alone.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::api_client::{ShortenApi, ShortenRequest, ShortenedLink};

pub const DEFAULT_EXPIRY_HOURS: u64 = 24;

/// Form values exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    pub url: String,
    /// Custom alias, empty when none was given.
    pub short: String,
    /// Expiry in hours, kept as text so the form can be re-filled verbatim.
    pub expiry: String,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            url: String::new(),
            short: String::new(),
            expiry: DEFAULT_EXPIRY_HOURS.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter a URL to shorten")]
    MissingUrl,

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("Expiry must be a whole number of hours, at least 1")]
    InvalidExpiry,
}

impl SubmissionDraft {
    /// Validates the draft and builds the outbound request.
    pub fn to_request(&self) -> Result<ShortenRequest, DraftError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(DraftError::MissingUrl);
        }
        Url::parse(url).map_err(|_| DraftError::InvalidUrl)?;

        let expiry = self
            .expiry
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|hours| *hours >= 1)
            .ok_or(DraftError::InvalidExpiry)?;

        Ok(ShortenRequest {
            url: url.to_string(),
            short: (!self.short.is_empty()).then(|| self.short.clone()),
            expiry,
        })
    }
}

/// Result of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    None,
    Error(String),
    Success(ShortenedLink),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: SubmissionDraft,
    pub in_flight: bool,
    pub outcome: Outcome,
}

pub struct FormController {
    api: Arc<dyn ShortenApi>,
    state: watch::Sender<FormState>,
}

impl FormController {
    pub fn new(api: Arc<dyn ShortenApi>, draft: SubmissionDraft) -> Self {
        let (state, _) = watch::channel(FormState {
            draft,
            ..Default::default()
        });

        Self { api, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Replaces the draft. Editing is allowed while a submission is in flight.
    pub fn edit(&self, draft: SubmissionDraft) {
        self.state.send_modify(|state| state.draft = draft);
    }

    /// Submits the current draft and records the outcome.
    ///
    /// Does nothing while another submission is in flight. A draft that fails
    /// validation is reported as an error without contacting the service.
    #[instrument(skip(self))]
    pub async fn submit(&self) {
        let (draft, in_flight) = {
            let state = self.state.borrow();
            (state.draft.clone(), state.in_flight)
        };

        if in_flight {
            debug!("submission already in flight");
            return;
        }

        let request = match draft.to_request() {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "draft rejected");
                self.state
                    .send_modify(|state| state.outcome = Outcome::Error(err.to_string()));
                return;
            }
        };

        let Some(_in_flight) = InFlight::begin(&self.state) else {
            debug!("submission already in flight");
            return;
        };

        info!(
            url = %request.url,
            alias = ?request.short,
            expiry = request.expiry,
            "submitting shorten request"
        );

        let outcome = match self.api.shorten(&request).await {
            Ok(link) => {
                info!(short = %link.short, "link shortened");
                Outcome::Success(link)
            }
            Err(err) => {
                warn!(error = %err, "shortening failed");
                Outcome::Error(err.to_string())
            }
        };

        self.state.send_modify(|state| state.outcome = outcome);
    }
}

/// Marks the form as in flight for as long as it is alive.
///
/// Dropping it clears the flag, so every exit from a submission releases the
/// submit control, including a cancelled future.
struct InFlight<'a> {
    state: &'a watch::Sender<FormState>,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a watch::Sender<FormState>) -> Option<Self> {
        let started = state.send_if_modified(|state| {
            if state.in_flight {
                return false;
            }

            state.in_flight = true;
            state.outcome = Outcome::None;
            true
        });

        started.then_some(Self { state })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.in_flight = false);
    }
}
