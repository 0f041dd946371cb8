//! Read-only queries over a post store
//!
//! Every function here is a pure view of the store's current contents.

use std::collections::HashMap;
use thiserror::Error;

use super::post::{Post, PostId};
use super::store::PostStore;

/// Number of posts returned by [`recent_posts`]
pub const RECENT_LIMIT: usize = 3;

/// Query errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("The post collection is empty")]
    EmptyCollection,
}

/// The first post flagged as featured, or the first post if none is
pub fn featured_post(store: &PostStore) -> Result<&Post, QueryError> {
    store
        .iter()
        .find(|p| p.featured)
        .or_else(|| store.posts().first())
        .ok_or(QueryError::EmptyCollection)
}

/// Up to [`RECENT_LIMIT`] posts, newest first, skipping `exclude`
pub fn recent_posts(store: &PostStore, exclude: Option<PostId>) -> Vec<&Post> {
    recent_posts_limited(store, exclude, RECENT_LIMIT)
}

/// Up to `limit` posts, newest first, skipping `exclude`
///
/// Posts sharing a date keep their collection order.
pub fn recent_posts_limited(
    store: &PostStore,
    exclude: Option<PostId>,
    limit: usize,
) -> Vec<&Post> {
    let mut posts: Vec<&Post> = store
        .iter()
        .filter(|p| Some(p.id) != exclude)
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts.truncate(limit);
    posts
}

/// Posts carrying `tag` verbatim, in collection order
pub fn posts_by_tag<'a>(store: &'a PostStore, tag: &str) -> Vec<&'a Post> {
    store.iter().filter(|p| p.has_tag(tag)).collect()
}

/// The first post whose slug is `slug`
pub fn post_by_slug<'a>(store: &'a PostStore, slug: &str) -> Option<&'a Post> {
    store.iter().find(|p| p.slug == slug)
}

/// Every post, newest first
pub fn archive(store: &PostStore) -> Vec<&Post> {
    recent_posts_limited(store, None, store.len())
}

/// Distinct tags with their post counts, most used first, then by name
pub fn tag_counts(store: &PostStore) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in store {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
