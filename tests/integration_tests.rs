//! Integration tests for the job matcher

use job_matcher::config::Config;
use job_matcher::error::JobMatcherError;
use job_matcher::input::manager::InputManager;
use job_matcher::matching::MatchEngine;
use job_matcher::output::report::{rank_records, MatchRecord};
use std::path::Path;

fn load_fixture_inputs() -> (job_matcher::ResumeAnalysis, String) {
    let mut manager = InputManager::new();
    let resume = manager
        .load_resume_analysis(Path::new("tests/fixtures/sample_analysis.json"))
        .unwrap();
    let job_text = manager
        .load_job_text(Path::new("tests/fixtures/sample_job.txt"))
        .unwrap();
    (resume, job_text)
}

fn engine() -> MatchEngine {
    MatchEngine::new(&Config::default()).unwrap()
}

#[test]
fn test_full_pipeline_from_fixtures() {
    let (resume, job_text) = load_fixture_inputs();
    let result = engine().match_job(&resume, &job_text);

    // Job vocabulary hits: python, sql, aws, docker, kubernetes; the resume
    // covers four of the five.
    assert_eq!(result.category_scores.technical_skills, 0.8);
    assert_eq!(result.category_scores.soft_skills, 1.0);
    // 5 resume years against the "3+ years of experience" requirement.
    assert_eq!(result.category_scores.experience, 1.0);
    // Required section names python, sql and communication, all present.
    assert_eq!(result.category_scores.must_have, 1.0);
    // Preferred section names aws, docker, kubernetes; two are covered.
    assert_eq!(result.category_scores.nice_to_have, 0.667);

    assert_eq!(
        result.requirements_missing.technical_skills,
        vec!["kubernetes".to_string()]
    );
    assert_eq!(
        result.detailed_analysis.recommendations,
        vec!["Consider highlighting experience with: kubernetes".to_string()]
    );
    assert_eq!(
        result.detailed_analysis.competitive_advantages,
        vec!["aws".to_string(), "docker".to_string()]
    );
    assert!(result.detailed_analysis.skill_gaps.is_empty());

    assert_eq!(
        result.detailed_analysis.strengths,
        vec![
            "Strong technical skill alignment".to_string(),
            "Experience level matches requirements".to_string(),
            "Meets most critical requirements".to_string(),
        ]
    );
}

#[test]
fn test_overall_score_matches_weighted_sum() {
    let (resume, job_text) = load_fixture_inputs();
    let result = engine().match_job(&resume, &job_text);

    let scores = &result.category_scores;
    let recomputed = 0.30 * scores.technical_skills
        + 0.15 * scores.soft_skills
        + 0.25 * scores.experience
        + 0.15 * scores.keywords
        + 0.15 * scores.must_have;

    // Category scores are individually rounded in the report, so allow one
    // unit in the third decimal.
    assert!((result.overall_score - recomputed).abs() <= 0.001);
}

#[test]
fn test_all_scores_stay_in_bounds() {
    let (resume, _) = load_fixture_inputs();
    let engine = engine();
    let mut manager = InputManager::new();

    for fixture in ["tests/fixtures/sample_job.txt", "tests/fixtures/frontend_job.txt"] {
        let job_text = manager.load_job_text(Path::new(fixture)).unwrap();
        let result = engine.match_job(&resume, &job_text);
        let scores = [
            result.overall_score,
            result.category_scores.technical_skills,
            result.category_scores.soft_skills,
            result.category_scores.experience,
            result.category_scores.keywords,
            result.category_scores.must_have,
            result.category_scores.nice_to_have,
        ];
        for score in scores {
            assert!((0.0..=1.0).contains(&score), "score out of bounds: {}", score);
        }
    }
}

#[test]
fn test_repeated_matches_are_byte_identical() {
    let (resume, job_text) = load_fixture_inputs();
    let engine = engine();

    let first = serde_json::to_string(&engine.match_job(&resume, &job_text)).unwrap();
    let second = serde_json::to_string(&engine.match_job(&resume, &job_text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_section_conventions_without_headings() {
    let (resume, _) = load_fixture_inputs();
    let result = engine().match_job(&resume, "We build Python services all day long.");

    // No required section grants full must-have credit; no preferred section
    // grants no nice-to-have credit.
    assert_eq!(result.category_scores.must_have, 1.0);
    assert_eq!(result.category_scores.nice_to_have, 0.0);
}

#[test]
fn test_missing_resume_analysis_short_circuits() {
    let mut manager = InputManager::new();
    let result = manager.load_resume_analysis(Path::new("tests/fixtures/absent.json"));

    assert!(matches!(
        result,
        Err(JobMatcherError::MissingResumeAnalysis(_))
    ));
}

#[test]
fn test_batch_ranking_puts_best_match_first() {
    let (resume, _) = load_fixture_inputs();
    let engine = engine();
    let mut manager = InputManager::new();

    let mut records: Vec<MatchRecord> = ["tests/fixtures/frontend_job.txt", "tests/fixtures/sample_job.txt"]
        .iter()
        .map(|fixture| {
            let path = Path::new(fixture);
            let job_text = manager.load_job_text(path).unwrap();
            MatchRecord::new(
                path.file_stem().unwrap().to_string_lossy().to_string(),
                engine.match_job(&resume, &job_text),
            )
        })
        .collect();

    rank_records(&mut records);

    assert_eq!(records[0].job_id, "sample_job");
    assert_eq!(records[1].job_id, "frontend_job");
    assert!(records[0].result.overall_score > records[1].result.overall_score);
}
