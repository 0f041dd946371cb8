//! Submission state machine

use chrono::NaiveDate;
use std::ops::RangeInclusive;
use thiserror::Error;

use super::draft::{Draft, ValidationError};
use super::slug::slugify;
use crate::config::BlogConfig;
use crate::content::{Post, PostId, PostStore};
use crate::helpers::route;

/// Where the caller should go after publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub post_id: PostId,
    pub slug: String,
    /// Route of the new post, e.g. `/post/<slug>`
    pub path: String,
}

/// Observable state of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Accepting edits; carries the errors of the last rejected submit, if any
    Editing { rejection: Option<ValidationError> },
    /// Terminal: the post was inserted
    Published(Navigation),
}

/// Reasons a submit attempt did not publish
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("This submission was already published")]
    AlreadyPublished,
}

/// Drives one new post from draft to publication
#[derive(Debug, Clone)]
pub struct Submission {
    draft: Draft,
    state: SubmissionState,
    read_time_range: RangeInclusive<u32>,
    post_route: String,
}

impl Submission {
    /// Start editing an empty draft
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            draft: Draft::new(config.default_read_time),
            state: SubmissionState::Editing { rejection: None },
            read_time_range: config.min_read_time..=config.max_read_time,
            post_route: config.post_route.clone(),
        }
    }

    /// Current draft fields
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the draft fields
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Current state
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether the post has been published
    pub fn is_published(&self) -> bool {
        matches!(self.state, SubmissionState::Published(_))
    }

    /// Validate the draft and, if it passes, prepend the new post to `store`
    ///
    /// The post gets id `store.len() + 1` and is dated `today`. A rejected
    /// draft leaves the store untouched and the submission editable.
    pub fn submit(
        &mut self,
        store: &mut PostStore,
        today: NaiveDate,
    ) -> Result<Navigation, SubmitError> {
        if self.is_published() {
            return Err(SubmitError::AlreadyPublished);
        }

        if let Err(err) = self.draft.validate(self.read_time_range.clone()) {
            tracing::debug!("Submission rejected: {:?}", err.problems);
            self.state = SubmissionState::Editing {
                rejection: Some(err.clone()),
            };
            return Err(err.into());
        }

        let slug = slugify(&self.draft.title);
        let post = Post {
            id: store.next_id(),
            title: self.draft.title.clone(),
            slug: slug.clone(),
            excerpt: self.draft.excerpt.clone(),
            cover_image: self.draft.cover_image_url.clone(),
            content: self.draft.content.clone(),
            date: today,
            read_time: self.draft.read_time,
            tags: self.draft.tags().to_vec(),
            featured: false,
        };

        let navigation = Navigation {
            post_id: post.id,
            path: route(&self.post_route, &slug),
            slug,
        };

        store.prepend(post);
        self.state = SubmissionState::Published(navigation.clone());
        Ok(navigation)
    }

    /// [`submit`](Self::submit) stamped with the local date
    pub fn submit_today(&mut self, store: &mut PostStore) -> Result<Navigation, SubmitError> {
        self.submit(store, crate::helpers::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::query;
    use crate::content::store::tests::post;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn store() -> PostStore {
        PostStore::from_posts(vec![
            post(1, "First", (2023, 4, 15), &["react"]),
            post(2, "Second", (2023, 3, 22), &["javascript"]),
        ])
        .unwrap()
    }

    fn filled(config: &BlogConfig) -> Submission {
        let mut submission = Submission::new(config);
        let draft = submission.draft_mut();
        draft.title = "Hello, World! 2024".to_string();
        draft.excerpt = "Greetings".to_string();
        draft.content = "Hi```js\nconsole.log(1)\n```".to_string();
        draft.cover_image_url = "https://example.com/hello.png".to_string();
        draft.add_tag("javascript");
        submission
    }

    #[test]
    fn test_valid_submission_publishes() {
        let config = BlogConfig::default();
        let mut store = store();
        let mut submission = filled(&config);

        let nav = submission.submit(&mut store, today()).unwrap();

        assert_eq!(nav.post_id, 3);
        assert_eq!(nav.slug, "hello-world-2024");
        assert_eq!(nav.path, "/post/hello-world-2024");
        assert_eq!(store.len(), 3);

        let first = &store.posts()[0];
        assert_eq!(first.id, 3);
        assert_eq!(first.slug, nav.slug);
        assert_eq!(first.date, today());
        assert_eq!(first.read_time, config.default_read_time);
        assert!(!first.featured);
        assert_eq!(submission.state(), &SubmissionState::Published(nav.clone()));

        assert_eq!(query::post_by_slug(&store, &nav.slug).map(|p| p.id), Some(3));
        assert_eq!(query::recent_posts(&store, None)[0].id, 3);
        let tagged: Vec<_> = query::posts_by_tag(&store, "javascript")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(tagged, vec![3, 2]);
    }

    #[test]
    fn test_missing_cover_rejected_without_insert() {
        let config = BlogConfig::default();
        let mut store = store();
        let mut submission = filled(&config);
        submission.draft_mut().cover_image_url.clear();

        let err = submission.submit(&mut store, today()).unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.posts()[0].id, 1);
        assert!(matches!(
            submission.state(),
            SubmissionState::Editing { rejection: Some(_) }
        ));
    }

    #[test]
    fn test_rejected_then_fixed() {
        let config = BlogConfig::default();
        let mut store = store();
        let mut submission = filled(&config);
        submission.draft_mut().remove_tag("javascript");

        assert!(submission.submit(&mut store, today()).is_err());

        submission.draft_mut().add_tag("rust");
        let nav = submission.submit(&mut store, today()).unwrap();
        assert_eq!(store.posts()[0].tags, vec!["rust"]);
        assert_eq!(nav.post_id, 3);
    }

    #[test]
    fn test_read_time_bounds() {
        let config = BlogConfig::default();
        let mut store = store();
        let mut submission = filled(&config);
        submission.draft_mut().read_time = 61;

        let err = submission.submit(&mut store, today()).unwrap_err();
        match err {
            SubmitError::Invalid(v) => assert!(v.missing_fields().is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_second_submit_refused() {
        let config = BlogConfig::default();
        let mut store = store();
        let mut submission = filled(&config);

        submission.submit(&mut store, today()).unwrap();
        assert_eq!(
            submission.submit(&mut store, today()).unwrap_err(),
            SubmitError::AlreadyPublished
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_submit_into_empty_store() {
        let config = BlogConfig::default();
        let mut store = PostStore::new();
        let nav = filled(&config).submit(&mut store, today()).unwrap();
        assert_eq!(nav.post_id, 1);
        assert_eq!(query::featured_post(&store).unwrap().id, 1);
    }
}
