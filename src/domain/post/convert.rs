//! Conversions from entries to blog posts, with validation.

use super::{BlogPost, ValidationError, BLOG_CONTENT_TYPE};
use crate::domain::entry::Entry;
use serde_json::Value;

impl TryFrom<&Entry> for BlogPost {
    type Error = ValidationError;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        // A missing content type link is accepted.
        if let Some(ct) = &entry.content_type {
            if ct != BLOG_CONTENT_TYPE {
                return Err(ValidationError::WrongContentType(ct.clone()));
            }
        }

        let mut errors = Vec::new();

        let slug = match entry.field_str("slug") {
            Some(s) if !s.is_empty() => Some(s.to_string()),
            _ => {
                errors.push(ValidationError::MissingSlug);
                None
            }
        };

        let title = match entry.field_str("title") {
            Some(t) if !t.is_empty() => Some(t.to_string()),
            _ => {
                errors.push(ValidationError::MissingTitle);
                None
            }
        };

        let body = match entry.field("body") {
            None | Some(Value::Null) => None,
            Some(Value::String(b)) => Some(b.clone()),
            Some(_) => {
                errors.push(ValidationError::InvalidBody);
                None
            }
        };

        match (slug, title) {
            (Some(slug), Some(title)) if errors.is_empty() => Ok(BlogPost {
                id: entry.id.clone(),
                slug,
                title,
                body,
                created_at: entry.created_at,
                updated_at: entry.updated_at,
            }),
            _ if errors.len() == 1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(entry.id.clone(), errors)),
        }
    }
}

impl TryFrom<Entry> for BlogPost {
    type Error = ValidationError;

    fn try_from(entry: Entry) -> Result<Self, Self::Error> {
        BlogPost::try_from(&entry)
    }
}
