//! devblog-rs: post repository and content pipeline for a developer blog
//!
//! This crate keeps an in-memory collection of posts, answers the queries a
//! blog front end needs (featured, recent, by tag, by slug), splits post
//! bodies into prose and fenced code segments, and runs the new-post
//! submission workflow.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod submit;

use anyhow::Result;
use std::path::Path;

use content::loader::{self, ContentLoader};
use content::PostStore;

/// The blog application: configuration plus the post store it owns
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory seed posts are read from
    pub posts_dir: std::path::PathBuf,
    /// Post collection
    pub store: PostStore,
}

impl Blog {
    /// Create a new Blog instance from a directory
    ///
    /// Reads `_config.yml` if present, then seeds the store from the posts
    /// directory, falling back to the built-in posts.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let store = if posts_dir.is_dir() {
            ContentLoader::new(&config).load_posts(&posts_dir)?
        } else {
            tracing::debug!("No posts directory at {:?}, using built-in posts", posts_dir);
            loader::load_seed()?
        };

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            store,
        })
    }

    /// Create a blog around an existing store, with default configuration
    pub fn with_store(store: PostStore) -> Self {
        Self {
            config: config::BlogConfig::default(),
            base_dir: std::path::PathBuf::from("."),
            posts_dir: std::path::PathBuf::from("posts"),
            store,
        }
    }

    /// Start a new post submission
    pub fn new_submission(&self) -> submit::Submission {
        submit::Submission::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_seed() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.store.len(), 6);
        assert_eq!(blog.config.recent_limit, 3);
    }

    #[test]
    fn test_new_with_config_and_posts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "posts_dir: articles\n").unwrap();
        fs::create_dir(dir.path().join("articles")).unwrap();
        fs::write(
            dir.path().join("articles/one.md"),
            "---\ntitle: One\ndate: 2024-02-02\ntags: [misc]\n---\nBody",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.store.len(), 1);
        assert_eq!(blog.store.posts()[0].slug, "one");
    }
}
