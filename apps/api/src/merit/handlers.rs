//! Axum route handlers for the merit statement form and JSON API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::merit::form::{validate_submission, FormInput};
use crate::merit::generator::generate_merit_statement;
use crate::merit::prompt_builder::{build_prompt, MeritPrompt};
use crate::render::render_page;
use crate::session::{FormAction, FormEvent, Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MeritRequest {
    pub form: FormInput,
    #[serde(default)]
    pub merits: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MeritResponse {
    pub summary: String,
    pub details: String,
    pub item_count: usize,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// HTML form
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Starts a fresh session and renders the empty form.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let session = Session::new();
    let html = render_page(&session);
    state.sessions.save(session).await;
    debug!("{} active session(s)", state.sessions.len().await);
    Html(html)
}

/// POST /
///
/// Applies one button press to the session and re-renders the whole page.
/// Validation and generation failures are shown inline; the form is kept.
pub async fn handle_form_event(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let event = FormEvent::from_pairs(pairs);
    let mut session = state.sessions.load(event.session_id).await.apply(&event);
    let mut status = StatusCode::OK;

    if event.action == FormAction::Generate {
        debug!(
            "Session {} requested generation with {} filled merit(s)",
            session.id,
            session.entries.filled_entries().len()
        );
        let outcome =
            generate_merit_statement(state.llm.as_ref(), &session.form, session.entries.entries())
                .await;
        match outcome {
            Ok(result) => {
                info!(
                    "Session {} generated a statement with {} item(s)",
                    session.id, result.item_count
                );
                session.record_generation(Ok(result));
            }
            Err(e) => {
                status = e.status();
                session.record_generation(Err(&e));
            }
        }
    }

    let html = render_page(&session);
    state.sessions.save(session).await;
    (status, Html(html)).into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// JSON API
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/merit/prompt
///
/// Returns the prompt that would be sent, without calling the model.
pub async fn handle_preview_prompt(
    payload: Result<Json<MeritRequest>, JsonRejection>,
) -> Result<Json<MeritPrompt>, AppError> {
    let request = read_request(payload)?;
    validate_submission(&request.form, &request.merits)?;
    Ok(Json(build_prompt(&request.form, &request.merits)))
}

/// POST /api/v1/merit/generate
///
/// Stateless generation: form + merits in, parsed statement out.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<MeritRequest>, JsonRejection>,
) -> Result<Json<MeritResponse>, AppError> {
    let request = read_request(payload)?;
    let result =
        generate_merit_statement(state.llm.as_ref(), &request.form, &request.merits).await?;

    Ok(Json(MeritResponse {
        summary: result.summary,
        details: result.details,
        item_count: result.item_count,
        generated_at: result.generated_at,
    }))
}

/// Malformed bodies get the same error envelope as any other validation failure.
fn read_request(
    payload: Result<Json<MeritRequest>, JsonRejection>,
) -> Result<MeritRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}
