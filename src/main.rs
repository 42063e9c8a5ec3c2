use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tokio::net::TcpListener;
use tracing::{info, instrument, level_filters::LevelFilter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use linkform::{
    api_client::HttpShortenApi,
    routes,
    settings::{env_name, Settings},
    state::{AppState, InnerState},
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();
    init_tracing().wrap_err("failed to set global tracing subscriber")?;

    info!(
        "Starting {} {}...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let settings = Arc::new(Settings::try_load().wrap_err("failed to load settings")?);

    let api = init_api(&settings)?;

    let app_state = AppState::new(InnerState {
        settings: settings.clone(),
        api: Arc::new(api),
    });

    let app = routes::router(app_state);
    let listener = init_listener(&settings).await?;

    info!(
        "listening on {} (shortening service at {})",
        listener
            .local_addr()
            .wrap_err("failed to get local address")?,
        settings.api.base_url
    );

    axum::serve(listener, app.into_make_service())
        .await
        .wrap_err("failed to run server")?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
        .with(ErrorLayer::default())
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var(env_name("LOG"))
                .from_env()?,
        )
        .try_init()?;

    Ok(())
}

#[instrument(skip(settings))]
fn init_api(settings: &Settings) -> Result<HttpShortenApi> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .wrap_err("failed to build HTTP client")?;

    let api = HttpShortenApi::new(http_client, &settings.api.base_url)
        .wrap_err("invalid shortening service address")?;

    info!(endpoint = %api.endpoint(), "shortening service configured");

    Ok(api)
}

async fn init_listener(settings: &Settings) -> Result<TcpListener> {
    TcpListener::bind(settings.general.listen_address.as_str())
        .await
        .wrap_err_with(|| format!("failed to bind {}", settings.general.listen_address))
}
