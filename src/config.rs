use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::errors::ConfigError;

/// Filename of the site configuration file, searched for in ancestor
/// directories to locate the site root.
pub const CONFIG_FILE: &str = "blog.toml";

fn default_edit_post_text() -> String {
    "Suggest Changes".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// Configuration for the "suggest an edit" link shown on post pages.
///
/// ```toml
/// [edit_post]
/// enabled = true
/// text = "Suggest Changes"
/// url = "https://github.com/user/site/edit/main/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditPost {
    /// Whether the edit link is rendered at all.
    #[serde(default)]
    pub enabled: bool,
    /// Link text, e.g. "Suggest Changes".
    #[serde(default = "default_edit_post_text")]
    pub text: String,
    /// Base URL of the repository's edit view; the post path is appended.
    #[serde(default)]
    pub url: String,
}

impl Default for EditPost {
    fn default() -> Self {
        EditPost {
            enabled: true,
            text: default_edit_post_text(),
            url: "https://github.com/example/site/edit/main/".to_string(),
        }
    }
}

/// Site-wide configuration for the blog.
///
/// Defaults are loaded first, then overridden by `BLOG_`-prefixed
/// environment variables, then by a `blog.toml` file at the site root.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Directory containing `blog.toml`; set while loading, not from the file.
    pub root_dir: PathBuf,
    /// Canonical site URL, used for feeds and OpenGraph tags.
    pub website: String,
    pub author: String,
    /// URL of the author's profile page.
    pub profile: String,
    /// Site description used in meta tags and the feed.
    pub desc: String,
    pub title: String,
    /// Offer both light and dark themes with a toggle.
    pub light_and_dark_mode: bool,
    /// Number of featured posts shown on the index page.
    pub post_per_index: usize,
    /// Number of posts per paginated listing page.
    pub post_per_page: usize,
    /// Margin in milliseconds before a scheduled post's publish time at
    /// which it already counts as published. Default: 15 minutes.
    pub scheduled_post_margin_ms: u64,
    pub show_archives: bool,
    /// Show a back button in the post detail view.
    pub show_back_button: bool,
    #[serde(default)]
    pub edit_post: EditPost,
    /// Generate OpenGraph images dynamically per post.
    pub dynamic_og_image: bool,
    /// HTML lang code. An empty value falls back to "en" via [`SiteConfig::lang`].
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Default global timezone in IANA format, e.g. "Asia/Kolkata".
    pub timezone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            root_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            website: "https://example.com/".to_string(),
            author: "Site Author".to_string(),
            profile: "https://example.com/".to_string(),
            desc: "A personal blog sharing insights, updates, and perspectives on tech."
                .to_string(),
            title: "Site Author".to_string(),
            light_and_dark_mode: true,
            post_per_index: 4,
            post_per_page: 4,
            scheduled_post_margin_ms: 15 * 60 * 1000, // 15 minutes
            show_archives: true,
            show_back_button: true,
            edit_post: EditPost::default(),
            dynamic_og_image: true,
            lang: default_lang(),
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn read(search_config_from: &Path) -> Result<Self, crate::SiteError> {
        let default_config = SiteConfig::default();
        let root_dir = Self::find_root_dir(search_config_from);
        let mut config: SiteConfig = Figment::new()
            .merge(Serialized::defaults(default_config))
            .merge(Env::prefixed("BLOG_"))
            .merge(Toml::file(root_dir.join(CONFIG_FILE)))
            .extract()
            .map_err(|e| ConfigError::ParseFailed(Box::new(e)))?;
        tracing::debug!("Loaded site config: {:?}", &config);
        config.root_dir = root_dir;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// Checks that:
    /// - `website` and `profile` parse as URLs
    /// - `edit_post.url` parses as a URL when the edit link is enabled
    /// - `post_per_index` and `post_per_page` are > 0
    /// - `timezone` is non-empty
    ///
    /// Note: an empty `lang` is valid (falls back to "en").
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_url("website", &self.website)?;
        Self::check_url("profile", &self.profile)?;
        if self.edit_post.enabled {
            Self::check_url("edit_post.url", &self.edit_post.url)?;
        }

        // A zero page size would render empty listings forever
        if self.post_per_page == 0 {
            return Err(ConfigError::InvalidPostsPerPage {
                value: self.post_per_page,
            });
        }
        if self.post_per_index == 0 {
            return Err(ConfigError::InvalidPostsPerIndex {
                value: self.post_per_index,
            });
        }

        if self.timezone.trim().is_empty() {
            return Err(ConfigError::EmptyTimezone);
        }

        Ok(())
    }

    /// Returns the HTML lang code, defaulting to "en" when unset.
    pub fn lang(&self) -> &str {
        if self.lang.is_empty() { "en" } else { &self.lang }
    }

    fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
        value
            .parse::<url::Url>()
            .map(|_| ())
            .map_err(|source| ConfigError::InvalidUrl {
                field,
                value: value.to_string(),
                source,
            })
    }

    fn find_root_dir(start_dir: &Path) -> PathBuf {
        Self::search_file_in_ancestors(start_dir, CONFIG_FILE)
            .unwrap_or_else(|| start_dir.to_path_buf())
    }

    fn search_file_in_ancestors<P: AsRef<Path>>(
        start_path: &Path,
        search_file: P, // the file I'm looking for (blog.toml)
    ) -> Option<PathBuf> {
        let search_file = search_file.as_ref();
        let dir = if start_path.is_dir() {
            start_path
        } else {
            start_path.parent()?
        };
        // ancestors() yields `dir`, then its parent, then its parent, … until root.
        dir.ancestors()
            .map(|ancestor| ancestor.join(search_file))
            .find(|candidate| candidate.as_path().is_file())
            .and_then(|file_path| file_path.parent().map(|p| p.to_path_buf()))
    }
}
