//! blogkit - personal blog site support library
//!
//! Typed site configuration and reading-time estimation for blog posts.

pub mod config;
pub mod errors;
pub mod read_time;

pub use config::{EditPost, SiteConfig};
pub use errors::{ConfigError, SiteError};
pub use read_time::{
    ReadTime, ReadTimeOptions, RoundingMode, count_words, format_label, sanitize_for_word_count,
};
