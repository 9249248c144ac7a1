/// Body for `GET /health`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body for `GET /version`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VersionResponse {
    pub app: String,
    pub version: String,
    /// Version of the toolchain the service was built with.
    pub runtime_version: String,
}

/// Request body for `POST /api/v1/qgen`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QuestionGenRequest {
    pub resume_context: String,
    pub role: String,
}

/// Response body for `POST /api/v1/qgen`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QuestionGenResponse {
    pub questions: Vec<String>,
}

/// Request body for `POST /api/v1/tts`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

/// Response body for `POST /api/v1/tts`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SpeechResponse {
    /// Base64-encoded audio bytes.
    pub audio: String,
}
