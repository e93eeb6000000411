//! Article domain model.
//!
//! # Invariants
//! - `id` is non-empty and never reassigned after creation.
//! - `date` is an ISO calendar date (`YYYY-MM-DD`).
//! - `tags` order is significant: cards display only the first three.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const DISPLAY_TAG_LIMIT: usize = 3;

/// Opaque article identity. Typically a millisecond timestamp string.
pub type ArticleId = String;

/// Fixed set of archive categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "LLM")]
    Llm,
    Agent,
    Code,
    Project,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Llm,
        Category::Agent,
        Category::Code,
        Category::Project,
    ];

    /// Stable display/wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Llm => "LLM",
            Self::Agent => "Agent",
            Self::Code => "Code",
            Self::Project => "Project",
        }
    }

    /// Parses a category name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical archive record.
///
/// Mutation at the store level is full-record replacement only; callers
/// rebuild the whole value (see `crate::editor::draft`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    /// Prose body; paragraphs are separated by a blank line.
    pub content: String,
    /// Source snippet shown in the code pane. `None` hides the pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Descriptive tag only; never checked against `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub category: Category,
    pub author: String,
    pub date: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Validates record invariants enforced on every write.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id.trim().is_empty() {
            return Err(ArticleValidationError::EmptyId);
        }
        if !ISO_DATE_RE.is_match(&self.date) {
            return Err(ArticleValidationError::InvalidDate {
                id: self.id.clone(),
                date: self.date.clone(),
            });
        }
        Ok(())
    }

    /// Returns `true` when the detail view should render a code pane.
    pub fn has_code(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| !code.trim().is_empty())
    }

    /// Splits `content` into display paragraphs on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }

    /// First tags shown on list cards.
    pub fn display_tags(&self) -> &[String] {
        let end = self.tags.len().min(DISPLAY_TAG_LIMIT);
        &self.tags[..end]
    }
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Generates a client-side id from the current epoch milliseconds.
pub fn new_article_id() -> ArticleId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyId,
    InvalidDate { id: ArticleId, date: String },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "article id cannot be empty"),
            Self::InvalidDate { id, date } => {
                write!(f, "article `{id}` has non-ISO date `{date}`")
            }
        }
    }
}

impl Error for ArticleValidationError {}

#[cfg(test)]
mod tests {
    use super::{new_article_id, today_iso, Article, ArticleValidationError, Category};

    fn sample() -> Article {
        Article {
            id: "42".to_string(),
            title: "Title".to_string(),
            excerpt: String::new(),
            content: "first\n\nsecond\n\n\n\nthird".to_string(),
            code: None,
            language: None,
            category: Category::Code,
            author: "Admin".to_string(),
            date: "2024-06-01".to_string(),
            image: String::new(),
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        }
    }

    #[test]
    fn category_uses_original_wire_names() {
        let json = serde_json::to_string(&Category::Llm).unwrap();
        assert_eq!(json, "\"LLM\"");
        let agent: Category = serde_json::from_str("\"Agent\"").unwrap();
        assert_eq!(agent, Category::Agent);
        assert_eq!(Category::parse(" project "), Some(Category::Project));
        assert_eq!(Category::parse("Poetry"), None);
    }

    #[test]
    fn paragraphs_skip_empty_blocks() {
        let article = sample();
        let paragraphs: Vec<&str> = article.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn display_tags_truncate_to_three() {
        let article = sample();
        assert_eq!(article.display_tags().len(), 3);
        assert_eq!(article.display_tags()[2], "c");
    }

    #[test]
    fn validate_rejects_blank_id_and_bad_date() {
        let mut article = sample();
        article.date = "June 1st".to_string();
        assert!(matches!(
            article.validate(),
            Err(ArticleValidationError::InvalidDate { .. })
        ));

        article.date = "2024-06-01".to_string();
        article.id = " ".to_string();
        assert_eq!(article.validate(), Err(ArticleValidationError::EmptyId));
    }

    #[test]
    fn generated_id_and_today_are_well_formed() {
        let id = new_article_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));

        let mut article = sample();
        article.date = today_iso();
        article.validate().expect("today should be an ISO date");
    }

    #[test]
    fn today_follows_the_utc_calendar() {
        let before = chrono::Utc::now().date_naive().to_string();
        let today = today_iso();
        let after = chrono::Utc::now().date_naive().to_string();
        assert!(today == before || today == after, "today={today}");
    }

    #[test]
    fn optional_code_fields_are_omitted_from_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("code").is_none());
        assert!(json.get("language").is_none());
        assert_eq!(json["category"], "Code");
    }
}
