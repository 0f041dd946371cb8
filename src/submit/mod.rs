//! New-post submission workflow
//!
//! A [`Submission`] collects draft fields, validates them on submit and, on
//! success, prepends the new post to a [`PostStore`](crate::content::PostStore).

mod draft;
mod slug;
mod workflow;

pub use draft::{Draft, DraftField, FieldProblem, ValidationError};
pub use slug::slugify;
pub use workflow::{Navigation, SubmitError, Submission, SubmissionState};
