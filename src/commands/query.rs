//! Featured, recent and by-tag listings

use anyhow::Result;

use super::summary_line;
use crate::content::{query, PostId};
use crate::helpers::tag_path;
use crate::Blog;

/// Print the featured post
pub fn featured(blog: &Blog) -> Result<()> {
    let post = query::featured_post(&blog.store)?;
    println!("{}", summary_line(blog, post));
    println!("  {}", post.excerpt);
    Ok(())
}

/// Print the most recent posts, optionally skipping one
pub fn recent(blog: &Blog, exclude: Option<PostId>) -> Result<()> {
    let posts = query::recent_posts_limited(&blog.store, exclude, blog.config.recent_limit);
    println!("Recent posts ({}):", posts.len());
    for post in posts {
        println!("  {}", summary_line(blog, post));
    }
    Ok(())
}

/// Print the posts carrying a tag
pub fn by_tag(blog: &Blog, tag: &str) -> Result<()> {
    let posts = query::posts_by_tag(&blog.store, tag);
    println!("{} ({}):", tag_path(&blog.config, tag), posts.len());
    for post in posts {
        println!("  {}", summary_line(blog, post));
    }
    Ok(())
}
