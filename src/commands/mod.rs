//! CLI command implementations

pub mod list;
pub mod new;
pub mod query;
pub mod show;

use crate::content::Post;
use crate::helpers::format_date;
use crate::Blog;

/// One-line summary of a post, as printed by the listing commands
pub fn summary_line(blog: &Blog, post: &Post) -> String {
    format!(
        "#{} {} · {} min read · {} [{}]",
        post.id,
        format_date(&post.date, &blog.config.date_format),
        post.read_time,
        post.title,
        post.slug
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let blog = Blog::with_store(crate::content::loader::load_seed().unwrap());
        let post = &blog.store.posts()[3];
        assert_eq!(
            summary_line(&blog, post),
            "#4 January 5, 2023 · 7 min read · CSS Grid vs Flexbox: When to Use Which [css-grid-vs-flexbox-when-to-use-which]"
        );
    }
}
