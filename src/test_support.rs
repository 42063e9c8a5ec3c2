use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::sync::Notify;
use url::Url;

use crate::{
    api_client::{ApiError, ShortenApi, ShortenRequest, ShortenedLink},
    settings::{ApiSettings, GeneralSettings, Settings, DEFAULT_API_BASE},
    state::{AppState, InnerState, SharedApi},
};

pub fn test_state(api: SharedApi) -> AppState {
    AppState::new(InnerState {
        settings: Arc::new(Settings {
            general: GeneralSettings {
                listen_address: "127.0.0.1:0".to_string(),
            },
            api: ApiSettings {
                base_url: Url::parse(DEFAULT_API_BASE).unwrap(),
            },
        }),
        api,
    })
}

pub fn sample_link() -> ShortenedLink {
    ShortenedLink {
        url: "https://example.com".to_string(),
        short: "http://localhost:3000/abc123".to_string(),
        expiry: 24,
        rate_limit: 9,
        rate_limit_reset: 60,
    }
}

/// Shortening service stub that answers from a queue of prepared results.
///
/// With a gate, every call waits for a `notify_one` before answering.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<ShortenedLink, ApiError>>>,
    requests: Mutex<Vec<ShortenRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    pub fn new(responses: impl IntoIterator<Item = Result<ShortenedLink, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn requests(&self) -> Vec<ShortenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenApi for ScriptedApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenedLink, ApiError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
