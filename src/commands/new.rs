//! Publish a new post through the submission workflow

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::submit::{Navigation, SubmitError};
use crate::Blog;

/// Field values for a new post, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub cover_image_url: String,
    pub content: Option<String>,
    pub content_file: Option<PathBuf>,
    pub tags: Vec<String>,
    pub read_time: Option<u32>,
}

/// Submit `new_post` into the blog's store
///
/// Validation problems are reported one per line.
pub fn create_post(blog: &mut Blog, new_post: NewPost) -> Result<Navigation> {
    let content = match (&new_post.content, &new_post.content_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {:?}", path))?,
        (None, None) => String::new(),
    };

    let mut submission = blog.new_submission();
    let draft = submission.draft_mut();
    draft.title = new_post.title;
    draft.excerpt = new_post.excerpt;
    draft.cover_image_url = new_post.cover_image_url;
    draft.content = content;
    if let Some(read_time) = new_post.read_time {
        draft.read_time = read_time;
    }
    for tag in &new_post.tags {
        draft.add_tag(tag);
    }

    match submission.submit_today(&mut blog.store) {
        Ok(navigation) => Ok(navigation),
        Err(SubmitError::Invalid(err)) => {
            let details: Vec<String> = err.problems.iter().map(|p| format!("  - {}", p)).collect();
            anyhow::bail!("{}\n{}", err, details.join("\n"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Run the new command
pub fn run(blog: &mut Blog, new_post: NewPost) -> Result<()> {
    let navigation = create_post(blog, new_post)?;
    println!("Published #{} at {}", navigation.post_id, navigation.path);
    Ok(())
}
