//! DEMS exam availability engine and its polling service.
//!
//! [`services`] decides, for a [`models::Subject`] and an instant, whether the
//! exam is not scheduled, upcoming, available, inactive or expired, and renders
//! the countdown and window strings the dashboard shows.

pub(crate) mod api;
pub(crate) mod core;
pub mod models;
pub(crate) mod schemas;
pub mod services;

#[cfg(test)]
mod test_support;

pub use crate::core::time::{parse_datetime_flexible, parse_utc_offset};

use crate::core::{config::Settings, state::AppState, telemetry};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let state = AppState::new(settings);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        display_offset = %state.display_offset(),
        "DEMS exam status API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    tracing::info!("Exam status API stopped");
    Ok(())
}
