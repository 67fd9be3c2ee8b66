//! Reading-time estimation for blog posts.
//!
//! Turns raw post content (markdown or rendered HTML) into a word count,
//! a minute estimate, and a display label like " 3 mins read". Code spans
//! and markup tags are stripped before counting so they don't inflate the
//! estimate.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)`{1,3}.*?`{1,3}").expect("Invalid CODE_SPAN_RE regex pattern")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").expect("Invalid TAG_RE regex pattern"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex pattern"));

/// How a fractional minute count is converted to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round to nearest (half rounds up).
    #[default]
    Round,
    /// Round up to the next whole minute.
    Ceil,
    /// Round down to the previous whole minute.
    Floor,
}

fn default_wpm() -> f64 {
    225.0
}

/// Parameters for the estimate. Common reading speeds are 200-250 wpm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadTimeOptions {
    /// Assumed reading speed in words per minute. Default: 225.
    #[serde(default = "default_wpm")]
    pub wpm: f64,
    /// Rounding policy for the minute estimate. Default: round to nearest.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for ReadTimeOptions {
    fn default() -> Self {
        ReadTimeOptions {
            wpm: default_wpm(),
            rounding: RoundingMode::default(),
        }
    }
}

/// Result of a reading-time estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadTime {
    /// Estimated minutes; at least 1 whenever `words` > 0.
    pub minutes: u64,
    pub words: usize,
    /// Display label, e.g. " 3 mins read".
    pub label: String,
}

/// Remove inline/fenced code and markup tags before counting words.
///
/// Code spans are stripped first: fenced blocks may contain angle
/// brackets that would otherwise be eaten by the tag pass. Whitespace
/// runs are then collapsed to single spaces and the result is trimmed.
pub fn sanitize_for_word_count(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let no_code = CODE_SPAN_RE.replace_all(input, "");
    let no_tags = TAG_RE.replace_all(&no_code, "");
    let collapsed = WHITESPACE_RE.replace_all(&no_tags, " ");
    collapsed.trim().to_string()
}

/// Count words in raw content after sanitization.
pub fn count_words(text: &str) -> usize {
    let clean = sanitize_for_word_count(text);
    clean.split_whitespace().filter(|t| !t.is_empty()).count()
}

/// Format the display label for a minute count.
///
/// `minutes <= 1` yields the singular " 1 min read" — including 0, so an
/// empty post still gets " 1 min read". That mirrors the site's original
/// behavior and is kept deliberately.
pub fn format_label(minutes: u64) -> String {
    if minutes <= 1 {
        " 1 min read".to_string()
    } else {
        format!(" {minutes} mins read")
    }
}

impl ReadTime {
    /// Compute reading time from raw markdown or plain text.
    ///
    /// Raw minutes are `words / wpm` (0 when `wpm` is not positive),
    /// rounded per the options. A post with any words at all reports at
    /// least 1 minute, overriding a rounded-down 0.
    pub fn from_text(body: &str, options: &ReadTimeOptions) -> Self {
        let words = count_words(body);
        let raw_minutes = if options.wpm > 0.0 {
            words as f64 / options.wpm
        } else {
            0.0
        };

        // f64::round is half-away-from-zero, which for non-negative input
        // is the same as half-up.
        let mut minutes = match options.rounding {
            RoundingMode::Ceil => raw_minutes.ceil(),
            RoundingMode::Floor => raw_minutes.floor(),
            RoundingMode::Round => raw_minutes.round(),
        } as u64;

        if words > 0 {
            minutes = minutes.max(1);
        }

        ReadTime {
            minutes,
            words,
            label: format_label(minutes),
        }
    }

    /// Compute reading time from rendered HTML.
    ///
    /// Tags are replaced with a single space (so `foo<br>bar` stays two
    /// words) and whitespace is collapsed before delegating to
    /// [`ReadTime::from_text`]. No code-fence stripping happens here;
    /// rendered markup has no fences.
    pub fn from_html(html: &str, options: &ReadTimeOptions) -> Self {
        let no_tags = TAG_RE.replace_all(html, " ");
        let collapsed = WHITESPACE_RE.replace_all(&no_tags, " ");
        Self::from_text(collapsed.trim(), options)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Estimation is deterministic
        #[test]
        fn prop_deterministic(body in ".*") {
            let options = ReadTimeOptions::default();
            let r1 = ReadTime::from_text(&body, &options);
            let r2 = ReadTime::from_text(&body, &options);
            prop_assert_eq!(r1, r2);
        }

        /// Any content at all yields at least one minute
        #[test]
        fn prop_min_one_minute_when_words(words in prop::collection::vec("[a-z]{1,10}", 1..100), wpm in 1.0f64..1000.0) {
            let body = words.join(" ");
            let options = ReadTimeOptions { wpm, rounding: RoundingMode::Round };
            let result = ReadTime::from_text(&body, &options);
            prop_assert_eq!(result.words, words.len());
            prop_assert!(result.minutes >= 1);
        }

        /// The label always agrees with the minute count
        #[test]
        fn prop_label_matches_minutes(body in ".*") {
            let result = ReadTime::from_text(&body, &ReadTimeOptions::default());
            prop_assert_eq!(result.label, format_label(result.minutes));
        }

        /// Ceil never yields fewer minutes than floor
        #[test]
        fn prop_ceil_at_least_floor(words in prop::collection::vec("[a-z]{1,10}", 0..200)) {
            let body = words.join(" ");
            let ceil = ReadTime::from_text(&body, &ReadTimeOptions { wpm: 225.0, rounding: RoundingMode::Ceil });
            let floor = ReadTime::from_text(&body, &ReadTimeOptions { wpm: 225.0, rounding: RoundingMode::Floor });
            prop_assert!(ceil.minutes >= floor.minutes);
        }

        /// Plain alphanumeric text with no markup counts whitespace tokens
        #[test]
        fn prop_plain_text_counts_tokens(words in prop::collection::vec("[a-z0-9]{1,12}", 0..50)) {
            let body = words.join("  ");
            let result = ReadTime::from_text(&body, &ReadTimeOptions::default());
            prop_assert_eq!(result.words, words.len());
        }
    }
}
