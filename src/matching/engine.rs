//! Match engine tying extraction, scoring and narration into one pipeline

use crate::config::Config;
use crate::error::Result;
use crate::matching::extractor::{JobRequirements, RequirementExtractor};
use crate::matching::narrator::{narrate, DetailedAnalysis};
use crate::matching::profile::ResumeAnalysis;
use crate::matching::scorer::{recommend, CategoryScores, MatchScorer, RequirementsCoverage};
use crate::matching::vocabulary::{MatchStrategy, VOCABULARY_VERSION};
use serde::{Deserialize, Serialize};

/// Full compatibility report for one resume/job pair.
///
/// Constructed fresh per match call and immutable once returned; persistence
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub requirements_met: RequirementsCoverage,
    pub requirements_missing: RequirementsCoverage,
    pub detailed_analysis: DetailedAnalysis,
    pub recommendation: String,
}

/// Stateless matching pipeline: job text is parsed into requirements, scored
/// against the resume analysis, and narrated.
///
/// All vocabulary tables and compiled patterns are built once here; a single
/// engine can score many jobs concurrently since every call depends only on
/// its arguments.
pub struct MatchEngine {
    extractor: RequirementExtractor,
    scorer: MatchScorer,
}

#[derive(Debug, Clone)]
pub struct MatchEngineStats {
    pub vocabulary_version: &'static str,
    pub vocabulary_skills: usize,
    pub strategy: MatchStrategy,
}

impl MatchEngine {
    /// Create an engine from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let extractor = RequirementExtractor::new(config.matching.strategy)?;
        let scorer = MatchScorer::new(config.scoring.clone());

        Ok(Self { extractor, scorer })
    }

    /// Score one job description against a resume analysis.
    pub fn match_job(&self, resume: &ResumeAnalysis, job_text: &str) -> MatchResult {
        let requirements = self.extractor.extract(job_text);
        let breakdown = self.scorer.score(resume, &requirements, job_text);
        let detailed_analysis = narrate(
            &breakdown.category_scores,
            &breakdown.requirements_met,
            &breakdown.requirements_missing,
        );
        let recommendation = recommend(breakdown.overall_score).to_string();

        MatchResult {
            overall_score: breakdown.overall_score,
            category_scores: breakdown.category_scores,
            requirements_met: breakdown.requirements_met,
            requirements_missing: breakdown.requirements_missing,
            detailed_analysis,
            recommendation,
        }
    }

    /// Extract requirements without scoring, for inspection.
    pub fn extract_requirements(&self, job_text: &str) -> JobRequirements {
        self.extractor.extract(job_text)
    }

    pub fn stats(&self) -> MatchEngineStats {
        MatchEngineStats {
            vocabulary_version: VOCABULARY_VERSION,
            vocabulary_skills: self.extractor.matcher().skill_count(),
            strategy: self.extractor.matcher().strategy(),
        }
    }
}
