//! Draft fields and their validation

use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A draft field that must be filled before publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Excerpt,
    Content,
    CoverImageUrl,
    Tags,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Title => "title",
            DraftField::Excerpt => "excerpt",
            DraftField::Content => "content",
            DraftField::CoverImageUrl => "cover image URL",
            DraftField::Tags => "tags",
        };
        f.write_str(name)
    }
}

/// A single reason a draft was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing(DraftField),
    ReadTimeOutOfRange { value: u32, min: u32, max: u32 },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing(field) => write!(f, "{} is required", field),
            FieldProblem::ReadTimeOutOfRange { value, min, max } => write!(
                f,
                "read time must be between {} and {} minutes, got {}",
                min, max, value
            ),
        }
    }
}

/// A draft failed validation; nothing was published
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing fields: please fill all required fields")]
pub struct ValidationError {
    pub problems: Vec<FieldProblem>,
}

impl ValidationError {
    /// Fields reported as missing, in form order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        self.problems
            .iter()
            .filter_map(|p| match p {
                FieldProblem::Missing(field) => Some(*field),
                _ => None,
            })
            .collect()
    }
}

/// In-progress field set of a new post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image_url: String,
    pub read_time: u32,
    tags: Vec<String>,
}

impl Draft {
    /// An empty draft with the given initial read time
    pub fn new(read_time: u32) -> Self {
        Self {
            read_time,
            ..Default::default()
        }
    }

    /// Working tag sequence, in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Append `tag` unless it is blank or already present verbatim
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if tag.trim().is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove the first exact match of `tag`
    ///
    /// Returns whether a tag was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Check every field; all problems are reported together
    pub fn validate(&self, read_time_range: RangeInclusive<u32>) -> Result<(), ValidationError> {
        let required = [
            (DraftField::Title, &self.title),
            (DraftField::Excerpt, &self.excerpt),
            (DraftField::Content, &self.content),
            (DraftField::CoverImageUrl, &self.cover_image_url),
        ];

        let mut problems: Vec<FieldProblem> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| FieldProblem::Missing(*field))
            .collect();

        if self.tags.is_empty() {
            problems.push(FieldProblem::Missing(DraftField::Tags));
        }

        if !read_time_range.contains(&self.read_time) {
            problems.push(FieldProblem::ReadTimeOutOfRange {
                value: self.read_time,
                min: *read_time_range.start(),
                max: *read_time_range.end(),
            });
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { problems })
        }
    }
}
