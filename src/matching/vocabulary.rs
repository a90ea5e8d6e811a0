//! Versioned skill vocabulary tables and keyword matching strategies

use crate::error::{JobMatcherError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Version tag for the built-in vocabulary tables. Bump when the tables change
/// so persisted match results can be traced back to the vocabulary they used.
pub const VOCABULARY_VERSION: &str = "2024.1";

/// How vocabulary tokens are located inside job text.
///
/// `Substring` reproduces the original behavior: a skill is present iff its
/// lowercase token occurs anywhere in the lowercased text, so "java" also
/// fires inside "javascript". `WordBoundary` additionally requires the
/// characters adjacent to the match to be non-alphanumeric, trading recall
/// for a lower false-positive rate on short tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Substring,
    WordBoundary,
}

impl Default for MatchStrategy {
    fn default() -> Self {
        MatchStrategy::Substring
    }
}

/// Requested seniority tier found in a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Inclusive years band expected for this level. `None` means unbounded.
    pub fn year_band(&self) -> (u32, Option<u32>) {
        match self {
            ExperienceLevel::Entry => (0, Some(2)),
            ExperienceLevel::Mid => (3, Some(5)),
            ExperienceLevel::Senior => (6, Some(10)),
            ExperienceLevel::Executive => (10, None),
        }
    }
}

/// Technical skill tokens, partitioned by category.
const TECHNICAL_SKILLS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["python", "java", "javascript", "c++", "c#", "go", "rust", "ruby"],
    ),
    (
        "web",
        &["html", "css", "react", "angular", "vue", "node.js", "django", "flask"],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
    ),
    (
        "data",
        &["pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "spark"],
    ),
    ("tools", &["git", "jenkins", "jira", "linux", "bash", "vim"]),
];

/// Soft skill tokens, partitioned by category.
const SOFT_SKILLS: &[(&str, &[&str])] = &[
    (
        "leadership",
        &["leadership", "management", "mentoring", "coaching", "team lead"],
    ),
    (
        "communication",
        &["communication", "presentation", "writing", "documentation"],
    ),
    (
        "collaboration",
        &["teamwork", "collaboration", "cross-functional", "agile", "scrum"],
    ),
    (
        "problem_solving",
        &["problem-solving", "analytical", "critical thinking", "debugging"],
    ),
];

/// Seniority indicator phrases, checked in declaration order. The first
/// indicator found in the text decides the level.
const EXPERIENCE_LEVELS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Entry,
        &["entry level", "junior", "0-2 years", "new grad", "recent graduate"],
    ),
    (
        ExperienceLevel::Mid,
        &["mid level", "intermediate", "3-5 years", "experienced"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "lead", "5+ years", "7+ years", "expert", "principal"],
    ),
    (
        ExperienceLevel::Executive,
        &["director", "vp", "cto", "head of", "chief"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillKind {
    Technical,
    Soft,
}

/// Skills detected in a span of job text, split by kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedSkills {
    pub technical: BTreeSet<String>,
    pub soft: BTreeSet<String>,
}

impl DetectedSkills {
    /// Union of both kinds, used for must-have / nice-to-have coverage.
    pub fn all(&self) -> BTreeSet<String> {
        self.technical.union(&self.soft).cloned().collect()
    }
}

/// Vocabulary matcher over the built-in skill tables.
///
/// The automaton is built once at construction and never mutated, so a single
/// matcher can serve concurrent lookups without coordination.
pub struct VocabularyMatcher {
    automaton: AhoCorasick,
    patterns: Vec<String>,
    kinds: Vec<SkillKind>,
    strategy: MatchStrategy,
}

impl VocabularyMatcher {
    pub fn new(strategy: MatchStrategy) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut kinds = Vec::new();

        for (_category, skills) in TECHNICAL_SKILLS {
            for skill in *skills {
                patterns.push((*skill).to_string());
                kinds.push(SkillKind::Technical);
            }
        }
        for (_category, skills) in SOFT_SKILLS {
            for skill in *skills {
                patterns.push((*skill).to_string());
                kinds.push(SkillKind::Soft);
            }
        }

        let automaton = AhoCorasick::builder()
            .build(&patterns)
            .map_err(|e| JobMatcherError::Vocabulary(format!("Failed to build matcher: {}", e)))?;

        Ok(Self {
            automaton,
            patterns,
            kinds,
            strategy,
        })
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Number of tokens in the vocabulary.
    pub fn skill_count(&self) -> usize {
        self.patterns.len()
    }

    /// Find all vocabulary skills present in `text`.
    ///
    /// `text` must already be lowercased; the extractor lowercases the job
    /// text exactly once before all lookups. Overlapping matches are reported
    /// so that substring semantics hold ("javascript" yields both "java" and
    /// "javascript").
    pub fn find_skills(&self, text: &str) -> DetectedSkills {
        let mut detected = DetectedSkills::default();

        for mat in self.automaton.find_overlapping_iter(text) {
            if self.strategy == MatchStrategy::WordBoundary
                && !on_word_boundary(text, mat.start(), mat.end())
            {
                continue;
            }
            let idx = mat.pattern().as_usize();
            let skill = self.patterns[idx].clone();
            match self.kinds[idx] {
                SkillKind::Technical => detected.technical.insert(skill),
                SkillKind::Soft => detected.soft.insert(skill),
            };
        }

        detected
    }
}

/// Detect the requested experience level, first indicator wins.
///
/// Levels are tried in declaration order (entry, mid, senior, executive) and
/// indicators by plain substring containment; there is no conflict resolution
/// or most-specific preference.
pub fn detect_experience_level(text: &str) -> Option<ExperienceLevel> {
    for (level, indicators) in EXPERIENCE_LEVELS {
        for indicator in *indicators {
            if text.contains(indicator) {
                return Some(*level);
            }
        }
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let left_ok = start == 0 || !is_word_byte(bytes[start - 1]);
    let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
    left_ok && right_ok
}
