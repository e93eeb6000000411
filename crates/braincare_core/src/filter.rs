//! Category and text projection of the article list.
//!
//! # Invariants
//! - Projection is a stable filter: output is an order-preserving
//!   subsequence of the input.
//! - Output depends only on `(records, category, query)`.

use crate::model::article::{Article, Category};

/// Category selection of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses `All` or a category name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::parse(value).map(Self::Only)
    }

    pub fn matches(self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => article.category == category,
        }
    }
}

/// Returns `true` when the query is empty or found case-insensitively in
/// the title or in any tag.
pub fn matches_query(article: &Article, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Derives the visible subset of `records`.
pub fn project<'a>(
    records: &'a [Article],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Article> {
    records
        .iter()
        .filter(|article| category.matches(article) && matches_query(article, query))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectionKey {
    revision: u64,
    category: CategoryFilter,
    query: String,
}

/// Memoized projection keyed by store revision, category and query.
///
/// Re-renders with unchanged inputs reuse the cached indices instead of
/// re-scanning the collection.
#[derive(Debug, Default)]
pub struct ArticleProjection {
    key: Option<ProjectionKey>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl ArticleProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible records, recomputing only when an input changed.
    ///
    /// `revision` must change whenever `records` changes (see
    /// `RecordStore::revision`).
    pub fn visible<'a>(
        &mut self,
        revision: u64,
        records: &'a [Article],
        category: CategoryFilter,
        query: &str,
    ) -> Vec<&'a Article> {
        let fresh = self.key.as_ref().is_some_and(|key| {
            key.revision == revision && key.category == category && key.query == query
        });

        if !fresh {
            self.indices = records
                .iter()
                .enumerate()
                .filter(|(_, article)| category.matches(article) && matches_query(article, query))
                .map(|(index, _)| index)
                .collect();
            self.key = Some(ProjectionKey {
                revision,
                category,
                query: query.to_string(),
            });
            self.recomputations += 1;
        }

        self.indices
            .iter()
            .filter_map(|&index| records.get(index))
            .collect()
    }

    /// Number of times the projection was actually recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{matches_query, CategoryFilter};
    use crate::model::article::Category;
    use crate::model::seed::seed_articles;

    #[test]
    fn query_matches_tags_case_insensitively() {
        let seed = seed_articles();
        assert!(matches_query(&seed[0], "websockets"));
        assert!(matches_query(&seed[0], "GEMINI"));
        assert!(!matches_query(&seed[0], "python"));
    }

    #[test]
    fn category_filter_parses_all_and_names() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("llm"),
            Some(CategoryFilter::Only(Category::Llm))
        );
        assert_eq!(CategoryFilter::parse("misc"), None);
    }
}
