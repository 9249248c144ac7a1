use crate::evaluation::EvaluationResult;

/// What the interview flow should do after the last answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewAction {
    /// Ask the next fresh question.
    Next,
    /// Ask a clarifying follow-up instead of advancing.
    Followup,
    /// The interview is over.
    End,
}

/// Outcome of a single step decision. Created fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterviewDecision {
    pub action: InterviewAction,
}

/// Request body for `POST /api/v1/interview/next-step`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InterviewNextStepRequest {
    /// Extracted resume text, passed through to question generation.
    pub resume_context: String,
    /// Job role the candidate is interviewing for.
    pub role: String,
    /// Questions already posed in this session, in order.
    pub questions: Vec<String>,
    /// Running count of questions already asked.
    pub asked_count: u32,
    /// Evaluation of the last answer, absent before the first answer.
    #[serde(default)]
    pub evaluation: Option<EvaluationResult>,
}

/// Response body for `POST /api/v1/interview/next-step`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InterviewNextStepResponse {
    pub action: InterviewAction,
    /// Populated when the action asks a question and generation is configured.
    pub question: Option<String>,
    /// Base64-encoded speech for `question`, when synthesis is configured.
    pub audio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&InterviewAction::Next).unwrap(), r#""next""#);
        assert_eq!(serde_json::to_string(&InterviewAction::Followup).unwrap(), r#""followup""#);
        assert_eq!(serde_json::to_string(&InterviewAction::End).unwrap(), r#""end""#);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<InterviewAction>(r#""skip""#).is_err());
    }

    #[test]
    fn test_request_without_evaluation() {
        let req: InterviewNextStepRequest = serde_json::from_str(
            r#"{
                "resume_context": "Five years of Rust.",
                "role": "Backend Engineer",
                "questions": [],
                "asked_count": 0
            }"#,
        )
        .unwrap();
        assert!(req.evaluation.is_none());
        assert_eq!(req.asked_count, 0);
    }

    #[test]
    fn test_request_with_null_evaluation() {
        let req: InterviewNextStepRequest = serde_json::from_str(
            r#"{
                "resume_context": "",
                "role": "SRE",
                "questions": ["Tell me about yourself."],
                "asked_count": 1,
                "evaluation": null
            }"#,
        )
        .unwrap();
        assert!(req.evaluation.is_none());
    }

    #[test]
    fn test_response_keeps_absent_fields_as_null() {
        let resp = InterviewNextStepResponse {
            action: InterviewAction::End,
            question: None,
            audio: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["action"], "end");
        assert!(json["question"].is_null());
        assert!(json["audio"].is_null());
    }
}
