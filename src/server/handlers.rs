use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::conversation::{Progress, QUESTIONS, SessionHandle, Turn};
use crate::report::{FirDocument, render_html, report_filename};

use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub next_question: Option<String>,
    pub completed: bool,
    pub fir_content: FirDocument,
    pub progress: Progress,
    pub session_id: String,
}

impl ChatResponse {
    fn from_turn(turn: Turn, session_id: String) -> Self {
        Self {
            next_question: turn.next_question.map(str::to_string),
            completed: turn.completed,
            fir_content: turn.fir_content,
            progress: turn.progress,
            session_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub key: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: usize,
    pub catalog_sections: usize,
    pub index_categories: usize,
    pub fallback_used: bool,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let index = state.engine.index();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions: state.sessions.len(),
        catalog_sections: state.engine.catalog_sections(),
        index_categories: index.populated_categories(),
        fallback_used: index.fallback_merged(),
    })
}

pub(crate) async fn questions() -> Json<Vec<QuestionView>> {
    let views = QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, (key, prompt))| QuestionView {
            index,
            key: key.as_str(),
            prompt: *prompt,
        })
        .collect();
    Json(views)
}

pub(crate) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::Processing(rejection.body_text()))?;
    process_chat(&state, request).map(Json)
}

pub(crate) async fn download_report(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (filename, html) = render_session_report(&state, &session_id)?;
    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={filename}"),
        ),
    ];
    Ok((headers, html))
}

fn process_chat(state: &AppState, request: ChatRequest) -> Result<ChatResponse, ApiError> {
    let session_id = request
        .session_id
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let message = request.message.unwrap_or_default();

    let handle = state.sessions.get_or_create(&session_id);
    let turn = with_session(&handle, &session_id, |session| {
        if session.current_question_index() == 0 && message.is_empty() {
            session.opening_turn(&state.engine)
        } else {
            session.submit(&message, &state.engine)
        }
    })?;

    info!(
        session_id = %session_id,
        progress = turn.progress.current,
        completed = turn.completed,
        sections = turn.fir_content.applicable_sections.len(),
        "chat turn processed"
    );

    Ok(ChatResponse::from_turn(turn, session_id))
}

fn render_session_report(state: &AppState, session_id: &str) -> Result<(String, String), ApiError> {
    let handle = state
        .sessions
        .get(session_id)
        .ok_or_else(|| ApiError::UnknownSession(session_id.to_string()))?;
    let document = with_session(&handle, session_id, |session| {
        session.render_report(&state.engine)
    })?;

    info!(
        session_id = %session_id,
        fir_number = %document.fir_number,
        "rendered report download"
    );

    Ok((report_filename(&document.fir_number), render_html(&document)))
}

fn with_session<T>(
    handle: &SessionHandle,
    session_id: &str,
    apply: impl FnOnce(&mut crate::conversation::ConversationSession) -> T,
) -> Result<T, ApiError> {
    let mut session = handle.lock().map_err(|_| {
        ApiError::Processing(format!(
            "session {session_id} is unavailable after an earlier failure"
        ))
    })?;
    Ok(apply(&mut session))
}
