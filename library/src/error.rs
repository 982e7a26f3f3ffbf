use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to set locale {tag:?}; is it installed on this system?")]
    Locale { tag: String },

    #[error("Invalid pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Pattern {pattern:?} failed while matching: {reason}")]
    Match { pattern: String, reason: String },

    #[error("Source is not valid UTF-8 (line {line})")]
    Encoding { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
