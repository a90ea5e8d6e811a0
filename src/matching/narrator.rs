//! Narrative analysis derived from already-computed category scores

use crate::matching::scorer::{CategoryScores, RequirementsCoverage};
use serde::{Deserialize, Serialize};

/// Human-readable strengths, weaknesses and recommendations for one match.
/// Purely categorical text generation; deterministic given identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub competitive_advantages: Vec<String>,
}

/// Derive the narrative from category scores and met/missing requirement
/// lists. Thresholds are fixed; each crossed threshold appends one sentence.
pub fn narrate(
    scores: &CategoryScores,
    met: &RequirementsCoverage,
    missing: &RequirementsCoverage,
) -> DetailedAnalysis {
    let mut analysis = DetailedAnalysis::default();

    if scores.technical_skills >= 0.7 {
        analysis
            .strengths
            .push("Strong technical skill alignment".to_string());
    }
    if scores.experience >= 0.8 {
        analysis
            .strengths
            .push("Experience level matches requirements".to_string());
    }
    if scores.must_have >= 0.8 {
        analysis
            .strengths
            .push("Meets most critical requirements".to_string());
    }

    if scores.technical_skills < 0.5 {
        analysis
            .weaknesses
            .push("Limited technical skill overlap".to_string());
    }
    if scores.experience < 0.6 {
        analysis
            .weaknesses
            .push("Experience level below requirements".to_string());
    }
    if scores.must_have < 0.7 {
        analysis
            .weaknesses
            .push("Missing some critical requirements".to_string());
    }

    if !missing.technical_skills.is_empty() {
        let highlights: Vec<&str> = missing
            .technical_skills
            .iter()
            .take(3)
            .map(|s| s.as_str())
            .collect();
        analysis.recommendations.push(format!(
            "Consider highlighting experience with: {}",
            highlights.join(", ")
        ));
    }

    if !missing.must_have.is_empty() {
        analysis.skill_gaps = missing.must_have.clone();
        analysis.recommendations.push(
            "Focus on addressing critical skill gaps in resume optimization".to_string(),
        );
    }

    analysis.competitive_advantages = met.nice_to_have.clone();

    analysis
}
