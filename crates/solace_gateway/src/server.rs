use crate::types::{ChatRequest, ChatResponse, ErrorBody, FollowupRequest, FollowupResponse};
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use solace_reasoning::ConversationEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
struct AppState {
    engine: Arc<ConversationEngine>,
}

/// The gateway HTTP server.
///
/// - `POST /chatbot-response` — open a conversation from mood samples
/// - `POST /chatbot-followup` — continue with an echoed pattern
/// - `GET /health` — health check
///
/// Handlers hold no per-conversation state; each request builds and
/// discards its own session inside the engine, so concurrent calls
/// cannot interfere.
pub struct GatewayServer {
    engine: Arc<ConversationEngine>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(engine: Arc<ConversationEngine>, host: &str, port: u16) -> Self {
        Self {
            engine,
            host: host.to_string(),
            port,
        }
    }

    /// Build the router. Exposed separately so tests can drive handlers
    /// without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState {
            engine: self.engine.clone(),
        };
        Router::new()
            .route("/health", get(health))
            .route("/chatbot-response", post(handle_chat))
            .route("/chatbot-followup", post(handle_followup))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the server. Binds the listener up front so an unusable
    /// address fails the caller instead of a background task, then
    /// spawns the serve loop and returns its join handle.
    pub async fn start(self) -> anyhow::Result<tokio::task::JoinHandle<()>> {
        let app = self.router();
        let addr = format!("{}:{}", self.host, self.port);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Gateway failed to bind {addr}"))?;
        tracing::info!("Gateway listening on {}", addr);

        Ok(tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Gateway server error: {}", e);
            }
        }))
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    match state
        .engine
        .start(&req.moods, &req.name, &req.time_of_day)
        .await
    {
        Ok(opening) => Ok(Json(ChatResponse {
            chatbot_response: opening.reply,
            survey_question: opening.survey_question,
            survey_options: opening.survey_options,
            song_links: Vec::new(),
            song_titles: Vec::new(),
            mood_pattern: opening.mood_pattern,
        })),
        Err(e) => {
            tracing::error!("chatbot-response failed: {:#}", e);
            Err(internal_error(&e))
        }
    }
}

async fn handle_followup(
    State(state): State<AppState>,
    Json(req): Json<FollowupRequest>,
) -> Result<Json<FollowupResponse>, (StatusCode, Json<ErrorBody>)> {
    match state
        .engine
        .followup(&req.message, &req.mood_pattern, req.survey_completed)
        .await
    {
        Ok(followup) => Ok(Json(FollowupResponse {
            chatbot_response: followup.reply,
            song_titles: followup.song_titles,
            song_links: followup.song_links,
        })),
        Err(e) => {
            tracing::error!("chatbot-followup failed: {:#}", e);
            Err(internal_error(&e))
        }
    }
}

fn internal_error(e: &anyhow::Error) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}
