//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub author: String,

    // Content
    pub posts_dir: String,
    pub date_format: String,

    // Queries
    pub recent_limit: usize,

    // Submission form
    pub default_read_time: u32,
    pub min_read_time: u32,
    pub max_read_time: u32,

    // Routes
    pub post_route: String,
    pub tag_route: String,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Dev Blog".to_string(),
            author: "Roshan Jha".to_string(),

            posts_dir: "posts".to_string(),
            date_format: "%B %-d, %Y".to_string(),

            recent_limit: crate::content::query::RECENT_LIMIT,

            default_read_time: 5,
            min_read_time: 1,
            max_read_time: 60,

            post_route: "/post".to_string(),
            tag_route: "/category".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: true,
        }
    }
}
