//! Case-insensitive substring search over article names

use crate::model::{Article, Category};

/// Articles of one category that passed the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredCategory<'a> {
    /// Source category
    pub category: &'a Category,

    /// Matching articles with their position in the source list, in source order
    pub articles: Vec<(usize, &'a Article)>,
}

/// Whether `name` passes the search term
///
/// The empty term passes everything; otherwise the lowercased name must
/// contain the lowercased term.
#[must_use]
pub fn matches_search(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Filter one article list, preserving order
#[must_use]
pub fn filter_articles<'a>(articles: &'a [Article], search: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| matches_search(&article.name, search))
        .collect()
}

/// Filter every category independently
#[must_use]
pub fn filter_categories<'a>(categories: &'a [Category], search: &str) -> Vec<FilteredCategory<'a>> {
    categories
        .iter()
        .map(|category| FilteredCategory {
            category,
            articles: category
                .articles()
                .iter()
                .enumerate()
                .filter(|(_, article)| matches_search(&article.name, search))
                .collect(),
        })
        .collect()
}

/// Total number of matches across all categories
#[must_use]
pub fn filtered_count(filtered: &[FilteredCategory<'_>]) -> usize {
    filtered.iter().map(|group| group.articles.len()).sum()
}
