//! Requirement extraction from raw job description text

use crate::matching::vocabulary::{
    detect_experience_level, ExperienceLevel, MatchStrategy, VocabularyMatcher,
};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured requirements derived from a job description.
///
/// Sets are deduplicated and deterministically ordered. A skill listed in
/// `must_have` may also appear in `technical_skills`/`soft_skills`; the sets
/// are not mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub technical_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub years_experience: Option<u32>,
    pub must_have: BTreeSet<String>,
    pub nice_to_have: BTreeSet<String>,
    /// Free-text degree mentions, informational only and never scored.
    pub education: Vec<String>,
}

/// Parses free-text job descriptions into [`JobRequirements`].
pub struct RequirementExtractor {
    matcher: VocabularyMatcher,
    years_patterns: Vec<Regex>,
    education_patterns: Vec<Regex>,
    must_have_heading: Regex,
    must_have_terminator: Regex,
    nice_to_have_heading: Regex,
    paragraph_break: Regex,
}

impl RequirementExtractor {
    pub fn new(strategy: MatchStrategy) -> Result<Self> {
        let matcher = VocabularyMatcher::new(strategy)?;

        // Tried in priority order; the first pattern that matches anywhere in
        // the text determines the value.
        let years_patterns = vec![
            Regex::new(r"(\d+)\+?\s*years?\s*of\s*experience").expect("Invalid years regex"),
            Regex::new(r"(\d+)\+?\s*years?\s*experience").expect("Invalid years regex"),
            Regex::new(r"minimum\s*(\d+)\s*years?").expect("Invalid years regex"),
            Regex::new(r"at least\s*(\d+)\s*years?").expect("Invalid years regex"),
        ];

        let education_patterns = vec![
            Regex::new(r"(bachelor|master|phd|doctorate).*?(degree|in)\s+([^\n.]+)")
                .expect("Invalid education regex"),
            Regex::new(r"(b\.?s\.?|m\.?s\.?|ph\.?d\.?)\s+([^\n.]+)")
                .expect("Invalid education regex"),
            Regex::new(r"degree\s+in\s+([^\n.]+)").expect("Invalid education regex"),
        ];

        let must_have_heading =
            Regex::new(r"required|must have|essential").expect("Invalid heading regex");
        let must_have_terminator = Regex::new(r"preferred|nice to have|plus|bonus|\n\n")
            .expect("Invalid terminator regex");
        let nice_to_have_heading =
            Regex::new(r"preferred|nice to have|plus|bonus").expect("Invalid heading regex");
        let paragraph_break = Regex::new(r"\n\n").expect("Invalid paragraph regex");

        Ok(Self {
            matcher,
            years_patterns,
            education_patterns,
            must_have_heading,
            must_have_terminator,
            nice_to_have_heading,
            paragraph_break,
        })
    }

    pub fn matcher(&self) -> &VocabularyMatcher {
        &self.matcher
    }

    /// Extract structured requirements from raw job text.
    ///
    /// The text is lowercased once here; every subsequent lookup operates on
    /// the lowercased copy.
    pub fn extract(&self, job_text: &str) -> JobRequirements {
        let text = job_text.to_lowercase();

        let skills = self.matcher.find_skills(&text);
        let experience_level = detect_experience_level(&text);
        let years_experience = self.extract_years(&text);
        let education = self.extract_education(&text);

        // The must-have span runs from its heading up to an opposing heading
        // or a blank line; with neither present the section stays empty. The
        // nice-to-have span runs to the end of the text when unterminated.
        let must_have = self
            .section_span(&text, &self.must_have_heading, &self.must_have_terminator, false)
            .map(|span| self.matcher.find_skills(span).all())
            .unwrap_or_default();
        let nice_to_have = self
            .section_span(&text, &self.nice_to_have_heading, &self.paragraph_break, true)
            .map(|span| self.matcher.find_skills(span).all())
            .unwrap_or_default();

        JobRequirements {
            technical_skills: skills.technical,
            soft_skills: skills.soft,
            experience_level,
            years_experience,
            must_have,
            nice_to_have,
            education,
        }
    }

    fn extract_years(&self, text: &str) -> Option<u32> {
        for pattern in &self.years_patterns {
            if let Some(caps) = pattern.captures(text) {
                // The first matching pattern ends the search even when the
                // captured number does not fit.
                return caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            }
        }
        None
    }

    fn extract_education(&self, text: &str) -> Vec<String> {
        let mut education = Vec::new();
        for pattern in &self.education_patterns {
            for caps in pattern.captures_iter(text) {
                let parts: Vec<&str> = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .collect();
                if !parts.is_empty() {
                    education.push(parts.join(" "));
                }
            }
        }
        education
    }

    /// Slice the section starting at `heading` and ending just before the
    /// first `terminator` match after it. Returns `None` when the heading is
    /// absent, or when it is unterminated and `open_ended` is false.
    fn section_span<'a>(
        &self,
        text: &'a str,
        heading: &Regex,
        terminator: &Regex,
        open_ended: bool,
    ) -> Option<&'a str> {
        let h = heading.find(text)?;
        let rest = &text[h.end()..];
        let end = match terminator.find(rest) {
            Some(m) => h.end() + m.start(),
            None if open_ended => text.len(),
            None => return None,
        };
        Some(&text[h.start()..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> RequirementExtractor {
        RequirementExtractor::new(MatchStrategy::Substring).unwrap()
    }

    #[test]
    fn test_skill_extraction() {
        let reqs = extractor().extract("We need Python and React experience, plus strong communication.");

        assert!(reqs.technical_skills.contains("python"));
        assert!(reqs.technical_skills.contains("react"));
        assert!(reqs.soft_skills.contains("communication"));
    }

    #[test]
    fn test_years_pattern_priority() {
        let ex = extractor();

        // Pattern priority decides, not position in the text.
        let reqs = ex.extract("Minimum 5 years tenure. You bring 3+ years of experience.");
        assert_eq!(reqs.years_experience, Some(3));

        let reqs = ex.extract("5+ years experience with distributed systems");
        assert_eq!(reqs.years_experience, Some(5));

        let reqs = ex.extract("at least 4 years in production support");
        assert_eq!(reqs.years_experience, Some(4));

        let reqs = ex.extract("no numbers here");
        assert_eq!(reqs.years_experience, None);
    }

    #[test]
    fn test_experience_level_detection() {
        let ex = extractor();

        let reqs = ex.extract("Senior engineer role");
        assert_eq!(reqs.experience_level, Some(ExperienceLevel::Senior));

        let reqs = ex.extract("Head of engineering");
        assert_eq!(reqs.experience_level, Some(ExperienceLevel::Executive));
    }

    #[test]
    fn test_must_have_section_with_opposing_heading() {
        let reqs = extractor().extract("Required: Python and SQL. Preferred: Docker and AWS.");

        assert!(reqs.must_have.contains("python"));
        assert!(reqs.must_have.contains("sql"));
        assert!(!reqs.must_have.contains("docker"));

        assert!(reqs.nice_to_have.contains("docker"));
        assert!(reqs.nice_to_have.contains("aws"));
        assert!(!reqs.nice_to_have.contains("python"));
    }

    #[test]
    fn test_must_have_section_ends_at_blank_line() {
        let reqs = extractor().extract("Must have: Kubernetes and Terraform\n\nWe offer Docker training.");

        assert!(reqs.must_have.contains("kubernetes"));
        assert!(reqs.must_have.contains("terraform"));
        assert!(!reqs.must_have.contains("docker"));
    }

    #[test]
    fn test_unterminated_must_have_is_empty() {
        // Source behavior: without an opposing heading or blank line the
        // must-have search never completes.
        let reqs = extractor().extract("must have python");
        assert!(reqs.must_have.is_empty());
    }

    #[test]
    fn test_unterminated_nice_to_have_runs_to_end() {
        let reqs = extractor().extract("nice to have: docker");
        assert!(reqs.nice_to_have.contains("docker"));
    }

    #[test]
    fn test_missing_headings_leave_sections_empty() {
        let reqs = extractor().extract("We use Python and Docker daily.");
        assert!(reqs.must_have.is_empty());
        assert!(reqs.nice_to_have.is_empty());
    }

    #[test]
    fn test_education_extraction() {
        let reqs = extractor().extract("Bachelor degree in computer science or equivalent");

        assert!(!reqs.education.is_empty());
        assert!(reqs.education.iter().any(|e| e.contains("computer science")));
    }

    #[test]
    fn test_sets_are_deduplicated() {
        let reqs = extractor().extract("python python python");
        assert_eq!(reqs.technical_skills.len(), 1);
    }
}
