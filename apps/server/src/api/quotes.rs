use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    views::render_page,
};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Form, Json,
};
use quotedesk_core::Dashboard;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct QuoteForm {
    company: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(render_page(&Dashboard::default(), ""))
}

pub async fn index_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuoteForm>,
) -> Html<String> {
    let input = form.company.unwrap_or_default();
    let dashboard = state
        .dashboard_service
        .build_dashboard(Some(input.as_str()))
        .await;
    tracing::info!(
        "Quote page: {} quotes, {} errors",
        dashboard.quotes.len(),
        dashboard.errors.len()
    );
    Html(render_page(&dashboard, input.trim()))
}

pub async fn quotes_json(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuoteForm>,
) -> Json<Dashboard> {
    let dashboard = state
        .dashboard_service
        .build_dashboard(form.company.as_deref())
        .await;
    Json(dashboard)
}

pub async fn chart_svg(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ApiError::BadRequest("Symbol is required".to_string()));
    }

    let svg = state.dashboard_service.render_chart(&symbol).await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
