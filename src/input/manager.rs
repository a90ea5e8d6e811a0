//! Input manager for resume analysis records and job description text

use crate::error::{JobMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::matching::profile::ResumeAnalysis;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load the resume analysis record produced by the external analysis
    /// provider.
    ///
    /// A missing or empty record is the one genuine precondition failure of
    /// the matcher; it is reported explicitly so the caller can run the
    /// analysis step before matching.
    pub fn load_resume_analysis(&mut self, path: &Path) -> Result<ResumeAnalysis> {
        if !path.exists() {
            return Err(JobMatcherError::MissingResumeAnalysis(format!(
                "analyze a resume first, no record at {}",
                path.display()
            )));
        }

        if self.detect_file_type(path)? != FileType::Json {
            return Err(JobMatcherError::UnsupportedFormat(format!(
                "Resume analysis must be a JSON record: {}",
                path.display()
            )));
        }

        info!("Loading resume analysis from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let analysis: ResumeAnalysis = serde_json::from_str(&content)?;
        let analysis = analysis.normalize();

        if analysis.is_empty() {
            return Err(JobMatcherError::MissingResumeAnalysis(format!(
                "record at {} holds no skills, keywords or experience",
                path.display()
            )));
        }

        Ok(analysis)
    }

    /// Read a job description file as text. Markdown is read verbatim since
    /// formatting markers do not disturb the downstream lookups.
    pub fn load_job_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(JobMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Text | FileType::Markdown => {
                info!("Reading job description: {}", path.display());
                std::fs::read_to_string(path)?
            }
            FileType::Json | FileType::Unknown => {
                return Err(JobMatcherError::UnsupportedFormat(format!(
                    "Unsupported job description type: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                JobMatcherError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
