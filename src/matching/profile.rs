//! Resume analysis record supplied by the external analysis provider

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pre-computed resume analysis, the left-hand input of every match.
///
/// Produced outside this crate by whatever extraction pipeline the host
/// system runs (PDF/DOCX parsing, skill NLP); the matcher only relies on the
/// shape below. Skill sets hold lowercase, trimmed tokens with no duplicates;
/// `normalize` enforces that invariant on untrusted input. `keywords` is
/// ordered by importance, most important first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub technical_skills: BTreeSet<String>,
    #[serde(default)]
    pub soft_skills: BTreeSet<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ResumeAnalysis {
    /// Lowercase and trim all skill tokens, dropping entries that become
    /// empty. Keyword order is preserved.
    pub fn normalize(self) -> Self {
        Self {
            technical_skills: normalize_set(self.technical_skills),
            soft_skills: normalize_set(self.soft_skills),
            experience_years: self.experience_years,
            keywords: self.keywords,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.technical_skills.is_empty()
            && self.soft_skills.is_empty()
            && self.experience_years.is_none()
            && self.keywords.is_empty()
    }
}

fn normalize_set(set: BTreeSet<String>) -> BTreeSet<String> {
    set.into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        let analysis = ResumeAnalysis {
            technical_skills: ["  Python ", "AWS", ""]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            soft_skills: ["Leadership"].iter().map(|s| s.to_string()).collect(),
            experience_years: Some(5),
            keywords: vec!["Python".to_string()],
        };

        let normalized = analysis.normalize();

        assert!(normalized.technical_skills.contains("python"));
        assert!(normalized.technical_skills.contains("aws"));
        assert_eq!(normalized.technical_skills.len(), 2);
        assert!(normalized.soft_skills.contains("leadership"));
        // Keyword casing and order are left to the similarity step.
        assert_eq!(normalized.keywords, vec!["Python".to_string()]);
    }

    #[test]
    fn test_empty_detection() {
        assert!(ResumeAnalysis::default().is_empty());

        let analysis = ResumeAnalysis {
            experience_years: Some(0),
            ..Default::default()
        };
        assert!(!analysis.is_empty());
    }
}
