//! In-memory post store

use std::collections::HashSet;
use thiserror::Error;

use super::post::{Post, PostId};

/// Errors raised when a store is built from posts that break uniqueness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate post id: {0}")]
    DuplicateId(PostId),

    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("Post id {id} outside 1..={len}")]
    IdOutOfRange { id: PostId, len: usize },
}

/// Ordered collection of posts, owned exclusively by the store
///
/// Iteration order is collection order: the first post is the most recently
/// inserted one (insertions prepend).
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed posts, keeping their order
    ///
    /// Fails if two posts share an id or a slug, or if an id falls outside
    /// `1..=len`. Ids are then a permutation of `1..=len`, which keeps
    /// [`next_id`](Self::next_id) fresh.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, StoreError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        let len = posts.len();

        for post in &posts {
            if post.id == 0 || post.id as usize > len {
                return Err(StoreError::IdOutOfRange { id: post.id, len });
            }
            if !ids.insert(post.id) {
                return Err(StoreError::DuplicateId(post.id));
            }
            if !slugs.insert(post.slug.as_str()) {
                return Err(StoreError::DuplicateSlug(post.slug.clone()));
            }
        }

        Ok(Self { posts })
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Iterate posts in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// Posts in collection order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Identifier the next inserted post receives: current count plus one
    ///
    /// Only sound with a single writer and no deletions.
    pub fn next_id(&self) -> PostId {
        self.posts.len() as PostId + 1
    }

    /// Insert a post at the front of the collection
    ///
    /// No slug uniqueness check happens here; a colliding slug shadows the
    /// older post in slug lookups.
    pub(crate) fn prepend(&mut self, post: Post) {
        if self.posts.iter().any(|p| p.slug == post.slug) {
            tracing::warn!("Slug {:?} already in use, older post is now shadowed", post.slug);
        }
        tracing::info!("Published post #{} ({})", post.id, post.slug);
        self.posts.insert(0, post);
    }
}

impl<'a> IntoIterator for &'a PostStore {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
