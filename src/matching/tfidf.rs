//! TF-IDF keyword similarity between resume keywords and job text

use log::warn;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of vocabulary terms kept when vectorizing, ranked by
/// term frequency across both documents.
const MAX_FEATURES: usize = 1000;

/// Computes cosine similarity between two TF-IDF vectors built over exactly
/// two documents: the resume keyword list joined into one string, and the
/// cleaned job description text.
///
/// This step never fails from the caller's perspective: missing keywords and
/// any internal anomaly both degrade to a similarity of 0.0, with the anomaly
/// logged as a warning.
pub struct KeywordSimilarity {
    stop_words: HashSet<&'static str>,
    whitespace: Regex,
    specials: Regex,
    max_features: usize,
}

impl Default for KeywordSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordSimilarity {
    pub fn new() -> Self {
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");
        // Keep word characters, whitespace and the .,- punctuation the job
        // text cleaning preserves.
        let specials = Regex::new(r"[^\w\s.,-]").expect("Invalid specials regex");

        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            whitespace,
            specials,
            max_features: MAX_FEATURES,
        }
    }

    /// Similarity in [0.0, 1.0] between the resume keywords and the job text.
    pub fn similarity(&self, resume_keywords: &[String], job_text: &str) -> f64 {
        if resume_keywords.is_empty() {
            return 0.0;
        }

        let resume_text = resume_keywords.join(" ");
        let job_text = self.clean_text(job_text);

        match self.cosine_similarity(&resume_text, &job_text) {
            Ok(similarity) => similarity,
            Err(reason) => {
                warn!("Keyword similarity degraded to 0.0: {}", reason);
                0.0
            }
        }
    }

    /// Lowercase, collapse whitespace, and strip special characters other
    /// than `.,-` from the job text before vectorizing.
    pub fn clean_text(&self, text: &str) -> String {
        let collapsed = self
            .whitespace
            .replace_all(text.to_lowercase().trim(), " ")
            .to_string();
        self.specials.replace_all(&collapsed, " ").to_string()
    }

    fn cosine_similarity(&self, resume_text: &str, job_text: &str) -> Result<f64, String> {
        let resume_counts = self.term_counts(resume_text);
        let job_counts = self.term_counts(job_text);

        let vocabulary = self.build_vocabulary(&resume_counts, &job_counts);
        if vocabulary.is_empty() {
            return Err("empty vocabulary after stop-word removal".to_string());
        }

        let resume_vector = tfidf_vector(&vocabulary, &resume_counts, &job_counts, &resume_counts);
        let job_vector = tfidf_vector(&vocabulary, &resume_counts, &job_counts, &job_counts);

        let resume_norm = norm(&resume_vector);
        let job_norm = norm(&job_vector);
        if resume_norm == 0.0 || job_norm == 0.0 {
            return Ok(0.0);
        }

        let dot: f64 = resume_vector
            .iter()
            .zip(job_vector.iter())
            .map(|(a, b)| a * b)
            .sum();

        Ok(dot / (resume_norm * job_norm))
    }

    /// Tokenize into lowercase terms of at least two characters, dropping
    /// English stop words.
    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for word in text.unicode_words() {
            let term = word.to_lowercase();
            if term.chars().count() < 2 || self.stop_words.contains(term.as_str()) {
                continue;
            }
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }

    /// Union vocabulary of both documents, capped at `max_features` terms
    /// ordered by total frequency (ties broken alphabetically). Returned in
    /// sorted order so vectorization is deterministic.
    fn build_vocabulary(
        &self,
        resume_counts: &HashMap<String, usize>,
        job_counts: &HashMap<String, usize>,
    ) -> Vec<String> {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for (term, count) in resume_counts.iter().chain(job_counts.iter()) {
            *totals.entry(term.as_str()).or_insert(0) += *count;
        }

        if totals.len() <= self.max_features {
            return totals.keys().map(|t| t.to_string()).collect();
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

/// Smoothed inverse document frequency over the two-document corpus.
fn idf(document_frequency: usize) -> f64 {
    let n_docs = 2.0;
    ((1.0 + n_docs) / (1.0 + document_frequency as f64)).ln() + 1.0
}

fn tfidf_vector(
    vocabulary: &[String],
    resume_counts: &HashMap<String, usize>,
    job_counts: &HashMap<String, usize>,
    doc_counts: &HashMap<String, usize>,
) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|term| {
            let tf = *doc_counts.get(term).unwrap_or(&0) as f64;
            let df = usize::from(resume_counts.contains_key(term))
                + usize::from(job_counts.contains_key(term));
            tf * idf(df)
        })
        .collect()
}

fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// English stop words removed before vectorization.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around",
    "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "bottom", "but", "by", "can", "cannot", "could", "do", "does", "done", "down", "during",
    "each", "either", "else", "elsewhere", "empty", "enough", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "first", "for", "former", "formerly", "from",
    "front", "full", "further", "had", "has", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "if", "in", "indeed", "into", "is", "it", "its", "itself", "last", "latter", "latterly",
    "least", "less", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next",
    "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off",
    "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "rather", "same", "see",
    "seem", "seemed", "seeming", "seems", "she", "should", "since", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "than", "that",
    "the", "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "this", "those", "though", "through",
    "throughout", "thus", "to", "together", "too", "top", "toward", "towards", "under", "until",
    "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose",
    "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];
