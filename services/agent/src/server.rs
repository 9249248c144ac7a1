use anyhow::Context;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use interview_core::decider::decide_next_step;
use interview_core::questioner::Questioner;
use interview_core::rules::InterviewRules;
use interview_core::speaker::Speaker;
use interview_types::{
    HealthResponse, InterviewAction, InterviewNextStepRequest, InterviewNextStepResponse,
    QuestionGenRequest, QuestionGenResponse, SpeechRequest, SpeechResponse, VersionResponse,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

pub const APP_NAME: &str = "ai-interview-agent";

/// Immutable per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub rules: InterviewRules,
    /// Absent when no API key is configured; the step endpoint then returns
    /// bare decisions and qgen responds 503.
    pub questioner: Option<Arc<dyn Questioner>>,
    pub speaker: Option<Arc<dyn Speaker>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("upstream model call failed: {0}")]
    Upstream(anyhow::Error),
    #[error("{0} is not configured")]
    Unavailable(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the full application router. Fails only on an unparseable entry in
/// the allowed-origins list.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> anyhow::Result<Router> {
    let cors = if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: {o}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api = Router::new()
        .route("/interview/next-step", post(next_step))
        .route("/qgen", post(generate_questions))
        .route("/tts", post(synthesize_speech));

    Ok(Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .nest("/api/v1", api)
        .layer(cors)
        .with_state(state))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        app: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        runtime_version: env!("AGENT_RUSTC_VERSION").to_string(),
    })
}

/// The interview step endpoint: decide, then enrich the decision with the
/// question text and its spoken form when the collaborators are configured.
async fn next_step(
    State(state): State<AppState>,
    Json(req): Json<InterviewNextStepRequest>,
) -> Result<Json<InterviewNextStepResponse>, ApiError> {
    let decision = decide_next_step(&state.rules, req.evaluation.as_ref(), req.asked_count);
    info!(
        action = ?decision.action,
        asked_count = req.asked_count,
        "interview step decided"
    );

    let mut question = None;
    let mut audio = None;

    if decision.action != InterviewAction::End {
        if let Some(questioner) = &state.questioner {
            let text = match decision.action {
                InterviewAction::Followup => {
                    let weak_areas = req
                        .evaluation
                        .as_ref()
                        .map(|e| e.weak_areas.as_slice())
                        .unwrap_or(&[]);
                    let last_question = req.questions.last().map(String::as_str).unwrap_or("");
                    questioner
                        .followup_question(&req.resume_context, &req.role, last_question, weak_areas)
                        .await
                }
                _ => {
                    questioner
                        .next_question(&req.resume_context, &req.role, &req.questions)
                        .await
                }
            }
            .map_err(ApiError::Upstream)?;

            if let Some(speaker) = &state.speaker {
                // A lost voice clip should not lose the question itself.
                match speaker.synthesize(&text).await {
                    Ok(encoded) => audio = Some(encoded),
                    Err(e) => warn!("speech synthesis failed: {e:#}"),
                }
            }
            question = Some(text);
        }
    }

    Ok(Json(InterviewNextStepResponse {
        action: decision.action,
        question,
        audio,
    }))
}

/// Initial question batch from the candidate's resume and target role.
async fn generate_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionGenRequest>,
) -> Result<Json<QuestionGenResponse>, ApiError> {
    let questioner = state
        .questioner
        .as_ref()
        .ok_or(ApiError::Unavailable("question generation"))?;

    let questions = questioner
        .generate_questions(&req.resume_context, &req.role)
        .await
        .map_err(ApiError::Upstream)?;
    info!(count = questions.len(), role = %req.role, "generated question batch");

    Ok(Json(QuestionGenResponse { questions }))
}

/// Text-to-speech for arbitrary interviewer lines.
async fn synthesize_speech(
    State(state): State<AppState>,
    Json(req): Json<SpeechRequest>,
) -> Result<Json<SpeechResponse>, ApiError> {
    let speaker = state
        .speaker
        .as_ref()
        .ok_or(ApiError::Unavailable("speech synthesis"))?;

    let audio = speaker
        .synthesize(&req.text)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(SpeechResponse { audio }))
}
