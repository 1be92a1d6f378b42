use axum::{
    Json, Router,
    extract::{Form, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::{AppConfig, ContentConfig};
use crate::content::{ContentSource, FileContentSource, HttpContentSource};
use crate::error::ContentError;
use crate::page::{CHAT_ACTION, EMBEDDED_HOME_CONTENT, build_portfolio_page, ids};
use crate::session::{PageSession, SessionOptions};

/// Build the content source described by the configuration.
pub fn content_source(config: &ContentConfig) -> Result<Arc<dyn ContentSource>, ContentError> {
    match &config.url {
        Some(url) => {
            let source = HttpContentSource::new(url, Duration::from_secs(config.timeout_secs))?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(FileContentSource::new(&config.path))),
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let timeout_duration = Duration::from_secs(config.server.request_timeout_secs);

    Router::new()
        .route("/", get(index_handler))
        .route(CHAT_ACTION, post(chat_handler))
        .route("/healthz", get(healthz))
        .route_service("/data/home.json", ServeFile::new(&config.content.path))
        .nest_service("/static", ServeDir::new(&config.page.static_dir))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let source = content_source(&config.content)?;
    info!(
        name: "content.source.configured",
        source = %source.location(),
        "Home content source configured"
    );

    let state = AppState {
        config: Arc::clone(&config),
        source,
    };
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the page.
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// Tab to select before rendering.
    #[serde(default)]
    tab: Option<String>,
}

/// Chat form submission.
#[derive(Debug, Deserialize)]
struct ChatForm {
    #[serde(default)]
    message: String,
}

/// Open a fresh page session with the configured source and initial tab.
async fn open_page(state: &AppState) -> PageSession {
    let page = build_portfolio_page(&state.config.page.title, Some(EMBEDDED_HOME_CONTENT));
    let options = SessionOptions {
        initial_tab: state.config.page.initial_tab.clone(),
    };
    PageSession::open(page, Arc::clone(&state.source), options).await
}

/// GET / - Open the page, run its components and return the rendered HTML.
async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let session = open_page(&state).await;

    if let Some(tab) = query.tab.as_deref() {
        if !session.click_tab(tab).await {
            tracing::debug!(tab = %tab, "Ignoring unknown tab in query");
        }
    }

    let html = session.render().await;
    session.unload();
    Html(html)
}

/// POST /chat - Submit the chat form on the contact tab and render the page
/// once the reply has arrived.
async fn chat_handler(State(state): State<AppState>, Form(form): Form<ChatForm>) -> Html<String> {
    let session = open_page(&state).await;
    session.click_tab("contact").await;
    session.type_into(ids::CHAT_INPUT, &form.message).await;
    session.submit_id(ids::CHAT_FORM).await;
    session.settle().await;

    let html = session.render().await;
    session.unload();
    Html(html)
}

/// GET /healthz - Liveness check.
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
