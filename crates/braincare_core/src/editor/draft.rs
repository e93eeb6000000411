//! Article editor form state.
//!
//! # Invariants
//! - Editing keeps the original `id`, `author`, `date` and `language`.
//! - Tags are typed as comma-separated text and stored trimmed, in order,
//!   without empty entries.

use crate::insight::Insight;
use crate::model::article::{Article, ArticleId, Category};
use crate::model::seed::DEFAULT_ARTICLE_IMAGE;

const NEW_ARTICLE_AUTHOR: &str = "Admin";
const NEW_ARTICLE_LANGUAGE: &str = "typescript";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub code: String,
    pub category: Category,
    /// Comma-separated tag text as typed.
    pub tags: String,
    pub image: String,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            code: String::new(),
            category: Category::Llm,
            tags: String::new(),
            image: DEFAULT_ARTICLE_IMAGE.to_string(),
        }
    }
}

impl ArticleDraft {
    /// Pre-fills the form from an existing record.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            code: article.code.clone().unwrap_or_default(),
            category: article.category,
            tags: article.tags.join(", "),
            image: article.image.clone(),
        }
    }

    /// Save is allowed once both title and body are filled in.
    pub fn can_save(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the full record to hand to `RecordStore::upsert`.
    ///
    /// With `existing`, identity and provenance fields are carried over.
    /// Otherwise `new_id` and `today` (`YYYY-MM-DD`) are used.
    pub fn into_article(
        self,
        existing: Option<&Article>,
        new_id: ArticleId,
        today: &str,
    ) -> Article {
        let tags = self.parsed_tags();
        let code = Some(self.code).filter(|code| !code.trim().is_empty());

        let (id, author, date, language) = match existing {
            Some(article) => (
                article.id.clone(),
                article.author.clone(),
                article.date.clone(),
                article
                    .language
                    .clone()
                    .or_else(|| Some(NEW_ARTICLE_LANGUAGE.to_string())),
            ),
            None => (
                new_id,
                NEW_ARTICLE_AUTHOR.to_string(),
                today.to_string(),
                Some(NEW_ARTICLE_LANGUAGE.to_string()),
            ),
        };

        Article {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            code,
            language,
            category: self.category,
            author,
            date,
            image: self.image,
            tags,
        }
    }

    /// Replaces the body with a refined one. Fallback text is ignored so a
    /// failed refinement never overwrites the author's draft.
    pub fn apply_refinement(&mut self, insight: &Insight) -> bool {
        if insight.is_fallback() {
            return false;
        }
        self.content = insight.text.clone();
        true
    }
}
