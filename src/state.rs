use std::{ops::Deref, sync::Arc};

use axum::extract::FromRef;

use crate::{api_client::ShortenApi, settings::ArcSettings};

#[derive(Clone)]
pub struct AppState(Arc<InnerState>);

impl AppState {
    pub fn new(state: InnerState) -> Self {
        Self(Arc::new(state))
    }
}

impl Deref for AppState {
    type Target = InnerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct InnerState {
    pub settings: ArcSettings,
    pub api: SharedApi,
}

pub type SharedApi = Arc<dyn ShortenApi>;

impl FromRef<AppState> for ArcSettings {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

impl FromRef<AppState> for SharedApi {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}
