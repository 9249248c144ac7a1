use crate::rules::InterviewRules;
use interview_types::{EvaluationResult, InterviewAction, InterviewDecision};

/// Decides what the interview flow does after the candidate's last answer.
///
/// The rules are checked in priority order and the first match wins:
/// the question cap ends the interview regardless of quality signals; a
/// missing evaluation means there is nothing to judge yet, so the flow
/// advances; a low-confidence evaluation is inconclusive rather than failing
/// and earns a follow-up; a failing score only earns a follow-up when the
/// evaluator also named weak areas for the follow-up to probe.
///
/// Pure and total: no I/O, no side effects, deterministic for a given
/// `rules`/`evaluation`/`asked_count` triple.
pub fn decide_next_step(
    rules: &InterviewRules,
    evaluation: Option<&EvaluationResult>,
    asked_count: u32,
) -> InterviewDecision {
    if asked_count >= rules.max_questions {
        return InterviewDecision {
            action: InterviewAction::End,
        };
    }

    let Some(evaluation) = evaluation else {
        return InterviewDecision {
            action: InterviewAction::Next,
        };
    };

    if evaluation.confidence < rules.min_confidence {
        return InterviewDecision {
            action: InterviewAction::Followup,
        };
    }

    if evaluation.score < rules.min_pass_score && !evaluation.weak_areas.is_empty() {
        return InterviewDecision {
            action: InterviewAction::Followup,
        };
    }

    InterviewDecision {
        action: InterviewAction::Next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> InterviewRules {
        InterviewRules {
            max_questions: 5,
            min_pass_score: 70.0,
            min_confidence: 0.6,
        }
    }

    fn eval(score: f32, confidence: f32, weak_areas: &[&str]) -> EvaluationResult {
        EvaluationResult {
            score,
            confidence,
            weak_areas: weak_areas.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_cap_ends_interview_regardless_of_evaluation() {
        let strong = eval(95.0, 0.95, &[]);
        assert_eq!(
            decide_next_step(&rules(), Some(&strong), 5).action,
            InterviewAction::End
        );
        assert_eq!(
            decide_next_step(&rules(), None, 5).action,
            InterviewAction::End
        );
        // Anything past the cap ends as well.
        assert_eq!(
            decide_next_step(&rules(), None, 17).action,
            InterviewAction::End
        );
    }

    #[test]
    fn test_missing_evaluation_advances() {
        assert_eq!(
            decide_next_step(&rules(), None, 2).action,
            InterviewAction::Next
        );
        assert_eq!(
            decide_next_step(&rules(), None, 0).action,
            InterviewAction::Next
        );
    }

    #[test]
    fn test_low_confidence_asks_followup_even_with_high_score() {
        let e = eval(80.0, 0.4, &[]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Followup
        );
    }

    #[test]
    fn test_low_score_with_weak_areas_asks_followup() {
        let e = eval(50.0, 0.9, &["clarity"]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Followup
        );
    }

    #[test]
    fn test_low_score_without_weak_areas_advances() {
        // A failing score alone does not trigger a follow-up; there is
        // nothing concrete for the follow-up to probe.
        let e = eval(50.0, 0.9, &[]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Next
        );
    }

    #[test]
    fn test_passing_score_advances() {
        let e = eval(90.0, 0.9, &[]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Next
        );
        // Weak areas are ignored once the score passes.
        let e = eval(90.0, 0.9, &["depth"]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Next
        );
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive_for_passing() {
        // Confidence exactly at the threshold is conclusive.
        let e = eval(90.0, 0.6, &[]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Next
        );
        // Score exactly at the threshold passes, weak areas or not.
        let e = eval(70.0, 0.9, &["clarity"]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 2).action,
            InterviewAction::Next
        );
        // One question below the cap still proceeds.
        assert_eq!(
            decide_next_step(&rules(), None, 4).action,
            InterviewAction::Next
        );
    }

    #[test]
    fn test_cap_beats_low_confidence() {
        let e = eval(10.0, 0.1, &["everything"]);
        assert_eq!(
            decide_next_step(&rules(), Some(&e), 5).action,
            InterviewAction::End
        );
    }
}
