pub mod evaluation;
pub mod service;
pub mod step;

//re-export types for easier access
pub use evaluation::EvaluationResult;
pub use service::{HealthResponse, QuestionGenRequest, QuestionGenResponse, SpeechRequest, SpeechResponse, VersionResponse};
pub use step::{InterviewAction, InterviewDecision, InterviewNextStepRequest, InterviewNextStepResponse};
