/// Hard cap on total questions per interview session.
pub const DEFAULT_MAX_QUESTIONS: u32 = 5;
/// Score at or above which an answer counts as passing.
pub const DEFAULT_MIN_PASS_SCORE: f32 = 70.0;
/// Evaluator confidence below which a result is treated as inconclusive.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;

/// Thresholds governing the step decision. Loaded once at startup and passed
/// around by value; the decider never reads globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterviewRules {
    pub max_questions: u32,
    pub min_pass_score: f32,
    pub min_confidence: f32,
}

impl Default for InterviewRules {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            min_pass_score: DEFAULT_MIN_PASS_SCORE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}
