//! Category scoring and weighted aggregation of match results

use crate::config::ScoringWeights;
use crate::matching::extractor::JobRequirements;
use crate::matching::profile::ResumeAnalysis;
use crate::matching::tfidf::KeywordSimilarity;
use crate::matching::vocabulary::ExperienceLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The six fixed per-category scores, each in [0.0, 1.0].
///
/// `nice_to_have` is reported but carries no weight in the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub experience: f64,
    pub keywords: f64,
    pub must_have: f64,
    pub nice_to_have: f64,
}

/// Per-category skill lists from the literal set operations, sorted for
/// deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementsCoverage {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
}

/// Numeric outcome of scoring one job against one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub requirements_met: RequirementsCoverage,
    pub requirements_missing: RequirementsCoverage,
}

/// Computes category sub-scores and the weighted overall score.
pub struct MatchScorer {
    weights: ScoringWeights,
    keyword_similarity: KeywordSimilarity,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            keyword_similarity: KeywordSimilarity::new(),
        }
    }

    /// Score `resume` against the extracted `reqs` and the raw job text.
    ///
    /// Empty-set conventions differ by category and are kept for
    /// compatibility with existing scores: technical and soft skills fall to
    /// 0.0 through the max-with-1 divisor guard, an empty must-have set
    /// grants full credit (1.0), and an empty nice-to-have set grants none
    /// (0.0).
    pub fn score(
        &self,
        resume: &ResumeAnalysis,
        reqs: &JobRequirements,
        job_text: &str,
    ) -> ScoreBreakdown {
        let tech_met: BTreeSet<String> = resume
            .technical_skills
            .intersection(&reqs.technical_skills)
            .cloned()
            .collect();
        let tech_score = tech_met.len() as f64 / reqs.technical_skills.len().max(1) as f64;

        let soft_met: BTreeSet<String> = resume
            .soft_skills
            .intersection(&reqs.soft_skills)
            .cloned()
            .collect();
        let soft_score = soft_met.len() as f64 / reqs.soft_skills.len().max(1) as f64;

        let experience_score = experience_score(
            resume.experience_years,
            reqs.years_experience,
            reqs.experience_level,
        );

        let keyword_score = self.keyword_similarity.similarity(&resume.keywords, job_text);

        // Must-have and nice-to-have coverage draw on the resume's combined
        // skill pool, not the technical set alone.
        let resume_skills: BTreeSet<String> = resume
            .technical_skills
            .union(&resume.soft_skills)
            .cloned()
            .collect();

        let must_have_met: BTreeSet<String> =
            resume_skills.intersection(&reqs.must_have).cloned().collect();
        let must_have_score = if reqs.must_have.is_empty() {
            1.0
        } else {
            must_have_met.len() as f64 / reqs.must_have.len() as f64
        };

        let nice_to_have_met: BTreeSet<String> = resume_skills
            .intersection(&reqs.nice_to_have)
            .cloned()
            .collect();
        let nice_to_have_score = if reqs.nice_to_have.is_empty() {
            0.0
        } else {
            nice_to_have_met.len() as f64 / reqs.nice_to_have.len() as f64
        };

        let overall = tech_score * self.weights.technical
            + soft_score * self.weights.soft_skills
            + experience_score * self.weights.experience
            + keyword_score * self.weights.keywords
            + must_have_score * self.weights.must_have;

        let requirements_missing = RequirementsCoverage {
            technical_skills: difference(&reqs.technical_skills, &resume.technical_skills),
            soft_skills: difference(&reqs.soft_skills, &resume.soft_skills),
            must_have: difference(&reqs.must_have, &must_have_met),
            nice_to_have: difference(&reqs.nice_to_have, &nice_to_have_met),
        };

        ScoreBreakdown {
            overall_score: round3(overall),
            category_scores: CategoryScores {
                technical_skills: round3(tech_score),
                soft_skills: round3(soft_score),
                experience: round3(experience_score),
                keywords: round3(keyword_score),
                must_have: round3(must_have_score),
                nice_to_have: round3(nice_to_have_score),
            },
            requirements_met: RequirementsCoverage {
                technical_skills: tech_met.into_iter().collect(),
                soft_skills: soft_met.into_iter().collect(),
                must_have: must_have_met.into_iter().collect(),
                nice_to_have: nice_to_have_met.into_iter().collect(),
            },
            requirements_missing,
        }
    }
}

/// Application recommendation tier for an overall score. Lower bounds are
/// inclusive; comparisons run top-down and the first match wins.
pub fn recommend(overall_score: f64) -> &'static str {
    if overall_score >= 0.8 {
        "Highly recommended - Excellent match"
    } else if overall_score >= 0.7 {
        "Recommended - Good match with minor gaps"
    } else if overall_score >= 0.6 {
        "Consider applying - Moderate match, resume optimization recommended"
    } else if overall_score >= 0.5 {
        "Marginal match - Significant resume optimization needed"
    } else {
        "Not recommended - Poor match for current profile"
    }
}

/// Piecewise experience policy.
///
/// Precedence: no recorded resume years (absent or zero) is neutral, then an
/// explicit years requirement, then the level band, then neutral.
fn experience_score(
    resume_years: Option<u32>,
    job_years: Option<u32>,
    job_level: Option<ExperienceLevel>,
) -> f64 {
    let resume_years = match resume_years {
        None | Some(0) => return 0.5,
        Some(years) => years as f64,
    };

    if let Some(job_years) = job_years.filter(|&y| y > 0) {
        let job_years = job_years as f64;
        return if resume_years >= job_years {
            1.0
        } else if resume_years >= job_years * 0.8 {
            0.8
        } else if resume_years >= job_years * 0.6 {
            0.6
        } else {
            0.3
        };
    }

    if let Some(level) = job_level {
        let (min_years, max_years) = level.year_band();
        let min_years = min_years as f64;
        let within = resume_years >= min_years
            && max_years.map_or(true, |max| resume_years <= max as f64);
        return if within {
            1.0
        } else if resume_years >= min_years * 0.8 {
            0.8
        } else {
            0.4
        };
    }

    0.5
}

fn difference(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Vec<String> {
    left.difference(right).cloned().collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(tech: &[&str], soft: &[&str], years: Option<u32>) -> ResumeAnalysis {
        ResumeAnalysis {
            technical_skills: tech.iter().map(|s| s.to_string()).collect(),
            soft_skills: soft.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            keywords: Vec::new(),
        }
    }

    fn skill_set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn scorer() -> MatchScorer {
        MatchScorer::new(ScoringWeights::default())
    }

    #[test]
    fn test_empty_set_conventions() {
        let breakdown = scorer().score(
            &resume(&["python"], &[], None),
            &JobRequirements::default(),
            "",
        );

        assert_eq!(breakdown.category_scores.technical_skills, 0.0);
        assert_eq!(breakdown.category_scores.soft_skills, 0.0);
        assert_eq!(breakdown.category_scores.must_have, 1.0);
        assert_eq!(breakdown.category_scores.nice_to_have, 0.0);
    }

    #[test]
    fn test_skill_ratio_and_rounding() {
        let reqs = JobRequirements {
            technical_skills: skill_set(&["python", "aws", "docker"]),
            ..Default::default()
        };
        let breakdown = scorer().score(&resume(&["python", "aws"], &[], None), &reqs, "");

        // 2/3 rounds to three decimals in the report.
        assert_eq!(breakdown.category_scores.technical_skills, 0.667);
        assert_eq!(
            breakdown.requirements_met.technical_skills,
            vec!["aws".to_string(), "python".to_string()]
        );
        assert_eq!(
            breakdown.requirements_missing.technical_skills,
            vec!["docker".to_string()]
        );
    }

    #[test]
    fn test_experience_against_explicit_years() {
        assert_eq!(experience_score(Some(5), Some(3), None), 1.0);
        assert_eq!(experience_score(Some(4), Some(5), None), 0.8);
        assert_eq!(experience_score(Some(3), Some(5), None), 0.6);
        assert_eq!(experience_score(Some(2), Some(5), None), 0.3);
    }

    #[test]
    fn test_experience_neutral_without_resume_years() {
        assert_eq!(experience_score(None, Some(5), None), 0.5);
        // Zero recorded years behaves like no record at all.
        assert_eq!(experience_score(Some(0), Some(5), None), 0.5);
        assert_eq!(experience_score(Some(5), None, None), 0.5);
    }

    #[test]
    fn test_experience_against_level_band() {
        assert_eq!(
            experience_score(Some(4), None, Some(ExperienceLevel::Mid)),
            1.0
        );
        assert_eq!(
            experience_score(Some(7), None, Some(ExperienceLevel::Mid)),
            0.8
        );
        assert_eq!(
            experience_score(Some(1), None, Some(ExperienceLevel::Senior)),
            0.4
        );
        assert_eq!(
            experience_score(Some(12), None, Some(ExperienceLevel::Executive)),
            1.0
        );
    }

    #[test]
    fn test_explicit_years_take_precedence_over_level() {
        assert_eq!(
            experience_score(Some(5), Some(10), Some(ExperienceLevel::Entry)),
            0.3
        );
    }

    #[test]
    fn test_weighted_overall_arithmetic() {
        let reqs = JobRequirements {
            technical_skills: skill_set(&["python"]),
            years_experience: Some(5),
            ..Default::default()
        };
        let breakdown = scorer().score(&resume(&["python"], &[], Some(10)), &reqs, "");

        // 0.30*1.0 + 0.15*0.0 + 0.25*1.0 + 0.15*0.0 + 0.15*1.0
        assert_eq!(breakdown.overall_score, 0.7);
        assert_eq!(
            recommend(breakdown.overall_score),
            "Recommended - Good match with minor gaps"
        );
    }

    #[test]
    fn test_must_have_draws_on_combined_skill_pool() {
        let reqs = JobRequirements {
            must_have: skill_set(&["python", "leadership"]),
            ..Default::default()
        };
        let breakdown = scorer().score(&resume(&["python"], &["leadership"], None), &reqs, "");

        assert_eq!(breakdown.category_scores.must_have, 1.0);
        assert_eq!(
            breakdown.requirements_met.must_have,
            vec!["leadership".to_string(), "python".to_string()]
        );
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(recommend(0.8), "Highly recommended - Excellent match");
        assert_eq!(recommend(0.7999), "Recommended - Good match with minor gaps");
        assert_eq!(
            recommend(0.6),
            "Consider applying - Moderate match, resume optimization recommended"
        );
        assert_eq!(
            recommend(0.5),
            "Marginal match - Significant resume optimization needed"
        );
        assert_eq!(
            recommend(0.499),
            "Not recommended - Poor match for current profile"
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let reqs = JobRequirements {
            technical_skills: skill_set(&["python", "go", "rust"]),
            soft_skills: skill_set(&["leadership"]),
            must_have: skill_set(&["python"]),
            nice_to_have: skill_set(&["docker"]),
            years_experience: Some(3),
            ..Default::default()
        };
        let breakdown = scorer().score(
            &resume(&["python", "go", "rust"], &["leadership"], Some(20)),
            &reqs,
            "python go rust leadership docker",
        );

        let scores = [
            breakdown.overall_score,
            breakdown.category_scores.technical_skills,
            breakdown.category_scores.soft_skills,
            breakdown.category_scores.experience,
            breakdown.category_scores.keywords,
            breakdown.category_scores.must_have,
            breakdown.category_scores.nice_to_have,
        ];
        for score in scores {
            assert!((0.0..=1.0).contains(&score), "score out of bounds: {}", score);
        }
    }
}
