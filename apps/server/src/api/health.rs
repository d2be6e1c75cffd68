use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, Json};
use quotedesk_core::dashboard::ProviderStatus;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

/// Circuit breaker state of the digital-asset provider.
pub async fn providers_status(State(state): State<Arc<AppState>>) -> Json<Vec<ProviderStatus>> {
    Json(state.dashboard_service.provider_status())
}
