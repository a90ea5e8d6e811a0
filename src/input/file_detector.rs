//! File type detection based on extensions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Resume analysis records exported by the analysis provider
    Json,
    /// Plain text job descriptions
    Text,
    /// Markdown job descriptions, read verbatim
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "json" => FileType::Json,
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}
