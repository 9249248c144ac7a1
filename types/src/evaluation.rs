/// Scored assessment of the candidate's most recent answer, produced by the
/// (external) evaluation component and attached to step requests.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluationResult {
    /// Quality of the answer, on the same scale as the pass threshold.
    pub score: f32,
    /// The evaluator's certainty in its own score.
    pub confidence: f32,
    /// Specific deficiencies identified in the answer, possibly empty.
    #[serde(default)]
    pub weak_areas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_areas_default_to_empty() {
        let eval: EvaluationResult =
            serde_json::from_str(r#"{"score": 80.0, "confidence": 0.9}"#).unwrap();
        assert_eq!(eval.score, 80.0);
        assert_eq!(eval.confidence, 0.9);
        assert!(eval.weak_areas.is_empty());
    }

    #[test]
    fn test_deserialize_with_weak_areas() {
        let eval: EvaluationResult = serde_json::from_str(
            r#"{"score": 55.5, "confidence": 0.7, "weak_areas": ["clarity", "depth"]}"#,
        )
        .unwrap();
        assert_eq!(eval.weak_areas, vec!["clarity", "depth"]);
    }
}
