//! Centralized error types for blogkit.
//!
//! This module provides typed errors using thiserror so callers can match
//! on failure kinds instead of handling `Box<dyn std::error::Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to site configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to find site root directory from path: {path}")]
    RootDirNotFound { path: PathBuf },

    #[error("Configuration parsing failed")]
    ParseFailed(Box<figment::Error>),

    #[error("Invalid {field} URL: {value}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid post_per_page: {value}. Must be greater than 0")]
    InvalidPostsPerPage { value: usize },

    #[error("Invalid post_per_index: {value}. Must be greater than 0")]
    InvalidPostsPerIndex { value: usize },

    #[error("Invalid timezone: must be a non-empty IANA zone name (e.g., Asia/Kolkata)")]
    EmptyTimezone,
}

// Convenience type alias for Results using SiteError
pub type Result<T> = std::result::Result<T, SiteError>;

// Auto-box figment::Error when converting to SiteError
impl From<figment::Error> for SiteError {
    fn from(err: figment::Error) -> Self {
        SiteError::ConfigParse(Box::new(err))
    }
}

// Auto-box figment::Error when converting to ConfigError
impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseFailed(Box::new(err))
    }
}
