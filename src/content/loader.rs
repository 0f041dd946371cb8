//! Content loader - builds the post store from seed data

use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post, PostId, PostStore};
use crate::config::BlogConfig;
use crate::submit::slugify;

/// Posts compiled into the binary, used when no posts directory exists
const SEED_POSTS: &str = include_str!("seed.yml");

/// Load the embedded seed collection
pub fn load_seed() -> Result<PostStore> {
    let posts: Vec<Post> = serde_yaml::from_str(SEED_POSTS).context("Invalid embedded seed")?;
    Ok(PostStore::from_posts(posts)?)
}

/// Loads posts from a directory of Markdown files
pub struct ContentLoader<'a> {
    config: &'a BlogConfig,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(config: &'a BlogConfig) -> Self {
        Self { config }
    }

    /// Load all posts under `dir`, newest first
    ///
    /// Files that fail to parse are skipped with a warning. Explicit ids must
    /// lie in `1..=N` for N loaded posts; posts without an `id` take the
    /// remaining numbers in file order.
    pub fn load_posts(&self, dir: &Path) -> Result<PostStore> {
        let mut files: Vec<_> = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
            .map(|e| e.into_path())
            .collect();
        files.sort();

        let mut posts = Vec::new();
        for path in &files {
            match self.load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        let taken: HashSet<PostId> = posts.iter().map(|p| p.id).collect();
        let mut free = (1..=posts.len() as PostId).filter(|id| !taken.contains(id));
        for post in posts.iter_mut().filter(|p| p.id == 0) {
            match free.next() {
                Some(id) => post.id = id,
                None => break,
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), dir);
        Ok(PostStore::from_posts(posts)?)
    }

    /// Load a single post from a file; id 0 means "unassigned"
    fn load_post(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let date = fm
            .parse_date()
            .ok_or_else(|| anyhow!("Missing or invalid date"))?;

        // Get title from front-matter or filename
        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let slug = fm.slug.unwrap_or_else(|| slugify(&title));

        Ok(Post {
            id: fm.id.unwrap_or(0),
            title,
            slug,
            excerpt: fm.excerpt.unwrap_or_default(),
            cover_image: fm.cover_image.unwrap_or_default(),
            content: body.to_string(),
            date,
            read_time: fm.read_time.unwrap_or(self.config.default_read_time),
            tags: fm.tags,
            featured: fm.featured,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::query;
    use chrono::NaiveDate;

    #[test]
    fn test_seed_loads() {
        let store = load_seed().unwrap();
        assert_eq!(store.len(), 6);
        let featured = query::featured_post(&store).unwrap();
        assert_eq!(
            featured.slug,
            "building-scalable-react-applications-with-typescript"
        );
        assert_eq!(featured.date, NaiveDate::from_ymd_opt(2023, 4, 15).unwrap());
        for post in &store {
            assert!(crate::content::render_content(&post.content).is_ok());
        }
    }

    #[test]
    fn test_load_posts_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("grid.md"),
            "---\ntitle: CSS Grid\ndate: 2023-01-05\ntags: [css]\n---\nGrid body",
        )
        .unwrap();
        fs::write(
            dir.path().join("hooks.md"),
            "---\nid: 1\ntitle: Hooks!\ndate: April 1, 2023\ntags: [react]\nfeatured: true\n---\nHooks body",
        )
        .unwrap();
        fs::write(dir.path().join("broken.md"), "---\ntitle: No date\n---\nx").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let config = BlogConfig::default();
        let store = ContentLoader::new(&config).load_posts(dir.path()).unwrap();

        assert_eq!(store.len(), 2);
        let first = &store.posts()[0];
        assert_eq!((first.id, first.slug.as_str()), (1, "hooks"));
        assert!(first.featured);

        let second = &store.posts()[1];
        assert_eq!((second.id, second.slug.as_str()), (2, "css-grid"));
        assert_eq!(second.read_time, config.default_read_time);
        assert_eq!(second.content, "Grid body");
    }

    #[test]
    fn test_duplicate_slugs_in_dir_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.md", "b.md"] {
            fs::write(
                dir.path().join(name),
                "---\ntitle: Same Title\ndate: 2023-01-05\n---\nbody",
            )
            .unwrap();
        }

        let config = BlogConfig::default();
        assert!(ContentLoader::new(&config).load_posts(dir.path()).is_err());
    }

    #[test]
    fn test_sparse_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("only.md"),
            "---\nid: 2\ntitle: Only\ndate: 2023-01-05\n---\nbody",
        )
        .unwrap();

        let config = BlogConfig::default();
        let err = ContentLoader::new(&config).load_posts(dir.path()).unwrap_err();
        assert!(err.to_string().contains("outside 1..=1"));
    }

    #[test]
    fn test_submit_after_mixed_ids_gets_fresh_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.md"),
            "---\ntitle: Alpha\ndate: 2023-01-01\n---\na",
        )
        .unwrap();
        fs::write(
            dir.path().join("b.md"),
            "---\nid: 1\ntitle: Beta\ndate: 2023-02-01\n---\nb",
        )
        .unwrap();
        fs::write(
            dir.path().join("c.md"),
            "---\ntitle: Gamma\ndate: 2023-03-01\n---\nc",
        )
        .unwrap();

        let config = BlogConfig::default();
        let mut store = ContentLoader::new(&config).load_posts(dir.path()).unwrap();

        let alpha = query::post_by_slug(&store, "alpha").unwrap();
        let gamma = query::post_by_slug(&store, "gamma").unwrap();
        assert_eq!((alpha.id, gamma.id), (2, 3));

        let mut submission = crate::submit::Submission::new(&config);
        let draft = submission.draft_mut();
        draft.title = "Delta".to_string();
        draft.excerpt = "d".to_string();
        draft.content = "d".to_string();
        draft.cover_image_url = "https://example.com/d.png".to_string();
        draft.add_tag("misc");
        let nav = submission.submit_today(&mut store).unwrap();

        assert_eq!(nav.post_id, 4);
        let ids: HashSet<PostId> = store.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.len());
    }
}
