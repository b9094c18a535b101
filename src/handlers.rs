use crate::bucketing::responses_from_answers;
use crate::dashboard::dashboard_cards;
use crate::errors::{AppError, ResultExt};
use crate::models::{
    AnswerRequest, AnswerResponse, SessionStarted, SessionView, SubmitResponse,
};
use crate::scoring_client::ScoringClient;
use crate::wizard::{prompt_for_step, WizardSession, CLOSING_MESSAGE, STEP_COUNT};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use moka::future::Cache;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote scoring service.
    pub scoring_client: ScoringClient,
    /// In-memory wizard sessions, evicted after the configured TTL.
    /// One logical flow per session; there is no cross-session state.
    pub sessions: Cache<Uuid, WizardSession>,
}

impl AppState {
    async fn session(&self, id: Uuid) -> Result<WizardSession, AppError> {
        self.sessions
            .get(&id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found or expired", id)))
    }
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "finpersona-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/sessions
///
/// Starts a new wizard session and returns the first bot prompt.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// * `Result<(StatusCode, Json<SessionStarted>), AppError>` - The new session id and opening prompt.
pub async fn start_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SessionStarted>), AppError> {
    let session = WizardSession::new();
    let id = session.id;
    state.sessions.insert(id, session).await;

    tracing::info!("Started wizard session {}", id);

    Ok((
        StatusCode::CREATED,
        Json(SessionStarted {
            session_id: id,
            step: 0,
            total_steps: STEP_COUNT,
            prompt: prompt_for_step(0).to_string(),
        }),
    ))
}

/// GET /api/v1/sessions/:id
///
/// Returns the current step, prompt, and transcript of a session.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `id` - The session id.
///
/// # Returns
///
/// * `Result<Json<SessionView>, AppError>` - The session view or a 404 if expired.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.session(id).await?;

    let current_step = session.current_step();
    Ok(Json(SessionView {
        session_id: session.id,
        created_at: session.created_at,
        current_step,
        total_steps: STEP_COUNT,
        submitted: session.is_submitted(),
        prompt: current_step.map(|s| prompt_for_step(s).to_string()),
        transcript: session.transcript().to_vec(),
    }))
}

/// POST /api/v1/sessions/:id/answers
///
/// Answers the session's current step. Steps must be answered strictly in
/// order; invalid payloads are rejected without advancing the step.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `id` - The session id.
/// * `request` - The step index and typed answer payload.
///
/// # Returns
///
/// * `Result<Json<AnswerResponse>, AppError>` - Answer summary and the next prompt.
pub async fn answer_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let mut session = state.session(id).await?;

    let entry = session.answer(request.step, request.answer)?;
    let next_step = session.current_step();
    state.sessions.insert(id, session).await;

    tracing::info!(
        "Session {} answered step {} ({})",
        id,
        entry.step,
        entry.summary
    );

    let (prompt, complete) = match next_step {
        Some(step) => (prompt_for_step(step).to_string(), false),
        None => (CLOSING_MESSAGE.to_string(), true),
    };

    Ok(Json(AnswerResponse {
        summary: entry.summary,
        next_step,
        prompt,
        complete,
    }))
}

/// POST /api/v1/sessions/:id/submit
///
/// Maps the collected answers to their categorical enumerations, submits
/// them to the scoring service, and returns the persona scores with the
/// rendered dashboard cards.
///
/// A scoring failure is surfaced as-is and the session stays in its
/// pre-submission state, so the caller may re-trigger the submit.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `id` - The session id.
///
/// # Returns
///
/// * `Result<Json<SubmitResponse>, AppError>` - Scores and dashboard payload.
pub async fn submit_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, AppError> {
    let mut session = state.session(id).await?;

    if session.is_submitted() {
        return Err(AppError::Conflict("Session already submitted".to_string()));
    }
    let answers = session.collected().ok_or_else(|| {
        AppError::Conflict("Cannot submit before all questions are answered".to_string())
    })?;

    let responses = responses_from_answers(&answers);
    tracing::info!(
        "Session {} submitting responses: income={:?} loans={:?} family={:?} expenses={:?} assets={:?}",
        id,
        responses.income,
        responses.loan_amount,
        responses.family_contribution,
        responses.upcoming_expenses,
        responses.asset_classes
    );

    // No retry: a failure propagates and the session stays unsubmitted.
    let scores = state
        .scoring_client
        .calculate_persona_scores(&responses)
        .await
        .context(format!("Failed to score session {}", id))?;

    session.mark_submitted()?;
    state.sessions.insert(id, session).await;
    tracing::info!("✓ Session {} scored and frozen", id);

    Ok(Json(SubmitResponse {
        dashboard: dashboard_cards(&scores),
        responses,
        scores,
    }))
}

/// GET /api/v1/scoring/test
///
/// Runs the scoring service's no-op diagnostic call.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// * `Result<Json<serde_json::Value>, AppError>` - `{"status": "ok"}` when reachable.
pub async fn scoring_diagnostic(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.scoring_client.test_calculate_scores().await?;
    Ok(Json(json!({ "status": "ok" })))
}
