//! Blog post domain — typed view over `blog` entries.

#[cfg(feature = "http")]
pub mod client;
mod convert;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type id of blog posts in the space.
pub const BLOG_CONTENT_TYPE: &str = "blog";

// ─── BlogPost ────────────────────────────────────────────────────────────────

/// A blog post with the fields the site renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub body: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingSlug,
    MissingTitle,
    InvalidBody,
    WrongContentType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Post validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingSlug => write!(f, "Missing slug"),
            ValidationError::MissingTitle => write!(f, "Missing title"),
            ValidationError::InvalidBody => write!(f, "Body is not text"),
            ValidationError::WrongContentType(ct) => {
                write!(f, "Expected content type {BLOG_CONTENT_TYPE}, got {ct}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
