//! Render a single post

use anyhow::{anyhow, Result};
use std::fmt::Write;

use crate::content::{query, render_content, HtmlRenderer, Post, Segment};
use crate::helpers::tag_path;
use crate::Blog;

/// Render the post with `slug`, as plain text or as an HTML fragment
pub fn render_post(blog: &Blog, slug: &str, html: bool) -> Result<String> {
    let post = query::post_by_slug(&blog.store, slug)
        .ok_or_else(|| anyhow!("Post not found: {}", slug))?;
    let segments = render_content(&post.content)?;

    if html {
        let renderer = HtmlRenderer::from_config(&blog.config.highlight);
        Ok(renderer.render(&segments))
    } else {
        Ok(render_text(blog, post, &segments))
    }
}

/// Print the post with `slug` along with related posts
pub fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    println!("{}", render_post(blog, slug, html)?);

    if !html {
        if let Some(post) = query::post_by_slug(&blog.store, slug) {
            println!("Related posts:");
            for related in query::recent_posts(&blog.store, Some(post.id)) {
                println!("  {}", super::summary_line(blog, related));
            }
        }
    }

    Ok(())
}

fn render_text(blog: &Blog, post: &Post, segments: &[Segment]) -> String {
    let mut out = String::new();
    let tags: Vec<String> = post.tags.iter().map(|t| tag_path(&blog.config, t)).collect();

    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(
        out,
        "{} · {} min read · {}",
        post.display_date(),
        post.read_time,
        tags.join(" ")
    );
    out.push('\n');

    for segment in segments {
        match segment {
            Segment::Prose(text) => out.push_str(text),
            Segment::Code { language, code } => {
                let label = if language.is_empty() { "code" } else { language };
                let _ = writeln!(out, "[{}]", label);
                for line in code.lines() {
                    let _ = writeln!(out, "    {}", line);
                }
            }
        }
    }

    out
}
