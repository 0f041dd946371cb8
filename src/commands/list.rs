//! List site content

use anyhow::Result;

use super::summary_line;
use crate::content::query;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = query::archive(&blog.store);
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {}", summary_line(blog, post));
            }
        }
        "tag" | "tags" => {
            let tags = query::tag_counts(&blog.store);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
