//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a post, unique within a store
pub type PostId = u32;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique positive identifier
    pub id: PostId,

    /// Post title
    pub title: String,

    /// Slug (URL-friendly name, derived from the title)
    pub slug: String,

    /// Short summary shown on cards
    pub excerpt: String,

    /// Cover image URL
    pub cover_image: String,

    /// Raw body, may contain fenced code segments
    pub content: String,

    /// Publication date
    #[serde(with = "display_date")]
    pub date: NaiveDate,

    /// Estimated read time in minutes
    pub read_time: u32,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is highlighted on the home page
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}

impl Post {
    /// Whether the post carries `tag` verbatim
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Date in the long display form, e.g. "April 15, 2023"
    pub fn display_date(&self) -> String {
        crate::helpers::full_date(&self.date)
    }
}

/// Serialize dates in their display form, accept any form `parse_date` knows
mod display_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&crate::helpers::full_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        crate::helpers::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: 1,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            excerpt: "Short".to_string(),
            cover_image: "https://example.com/a.png".to_string(),
            content: "Body".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 4, 15).unwrap(),
            read_time: 8,
            tags: vec!["react".to_string(), "typescript".to_string()],
            featured: true,
        }
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let post = sample();
        assert!(post.has_tag("react"));
        assert!(!post.has_tag("React"));
        assert!(!post.has_tag("rea"));
    }

    #[test]
    fn test_date_serializes_in_display_form() {
        let yaml = serde_yaml::to_string(&sample()).unwrap();
        assert!(yaml.contains("date: April 15, 2023"));
    }

    #[test]
    fn test_deserialize_iso_date() {
        let yaml = r#"
id: 2
title: Promises
slug: promises
excerpt: e
cover_image: c
content: body
date: 2023-03-22
read_time: 10
tags: [javascript]
"#;
        let post: Post = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2023, 3, 22).unwrap());
        assert!(!post.featured);
    }
}
