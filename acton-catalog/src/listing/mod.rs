//! Search and pagination over the fetched catalog
//!
//! [`ListingState`] is the visitor's ephemeral state (search term, page,
//! page size). [`ListingView::build`] runs the filter and the paginator over
//! the current categories and produces everything the templates render.
//!
//! ```rust
//! use acton_catalog::listing::{ListingState, ListingView};
//! use acton_catalog::pricing::PriceFormatter;
//!
//! let state = ListingState::new(10);
//! let view = ListingView::build(&[], &state, &PriceFormatter::default());
//! assert!(view.is_loading);
//! ```

pub mod filter;
pub mod paginate;

use serde::Deserialize;

pub use filter::{filter_articles, filter_categories, filtered_count, matches_search, FilteredCategory};
pub use paginate::{next_page, paginate, prev_page, total_pages};

use crate::model::{Article, Category};
use crate::pricing::PriceFormatter;

/// Query string of the listing route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    /// Search input
    #[serde(default)]
    pub q: Option<String>,

    /// Requested page (may be zero or negative)
    #[serde(default)]
    pub page: Option<i64>,
}

/// Visitor-side listing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    /// Current search input
    pub search: String,

    /// Current 1-indexed page, unbounded
    pub page: i64,

    /// Articles per page
    pub page_size: usize,
}

impl ListingState {
    /// Initial state: empty search on page 1
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// State described by a request's query string
    ///
    /// Missing values fall back to the initial state.
    #[must_use]
    pub fn from_query(query: ListingQuery, page_size: usize) -> Self {
        Self {
            search: query.q.unwrap_or_default(),
            page: query.page.unwrap_or(1),
            page_size,
        }
    }

    /// Replace the search input; the page is kept as is
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Move to the previous page
    #[must_use]
    pub const fn prev(mut self) -> Self {
        self.page = prev_page(self.page);
        self
    }

    /// Move to the next page
    #[must_use]
    pub const fn next(mut self) -> Self {
        self.page = next_page(self.page);
        self
    }
}

/// Category heading shown above the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Category name
    pub name: String,

    /// Article count reported by the server
    pub article_count: u64,
}

/// Sidebar navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    /// Stable list key
    pub key: String,

    /// Link text
    pub name: String,

    /// Root-relative target
    pub href: String,
}

/// Rendered article card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    /// Stable list key
    pub key: String,

    /// Article name (also the image alt text)
    pub name: String,

    /// First image, if any
    pub image: Option<String>,

    /// Formatted regular price
    pub price: String,
}

impl ArticleCard {
    fn new(article: &Article, index: usize, formatter: &PriceFormatter) -> Self {
        Self {
            key: article.render_key(index),
            name: article.name.clone(),
            image: article.primary_image().map(|image| image.path.clone()),
            price: formatter.format_minor(article.regular_price()),
        }
    }
}

/// The current page of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleGroup {
    /// Category name
    pub category: String,

    /// Cards on the current page
    pub cards: Vec<ArticleCard>,
}

/// Everything the listing templates need for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// No categories are available yet
    pub is_loading: bool,

    /// First category heading
    pub headline: Option<Headline>,

    /// First category's children
    pub links: Vec<CategoryLink>,

    /// Current page, per category, in source order
    pub groups: Vec<ArticleGroup>,

    /// Search input echoed back into the search box
    pub search: String,

    /// Current page
    pub page: i64,

    /// Page count reported to the pagination control
    pub total_pages: usize,

    /// Number of articles passing the search across all categories
    pub matched: usize,

    /// Target of the "previous" control
    pub prev_page: i64,

    /// Target of the "next" control
    pub next_page: i64,
}

impl ListingView {
    /// Run filter and paginator for `state` over `categories`
    #[must_use]
    pub fn build(categories: &[Category], state: &ListingState, formatter: &PriceFormatter) -> Self {
        let filtered = filter_categories(categories, &state.search);
        let matched = filtered_count(&filtered);
        let groups = filtered
            .iter()
            .map(|group| ArticleGroup {
                category: group.category.name.clone(),
                cards: paginate(&group.articles, state.page, state.page_size)
                    .iter()
                    .map(|(index, article)| ArticleCard::new(article, *index, formatter))
                    .collect(),
            })
            .collect();

        let first = categories.first();

        Self {
            is_loading: categories.is_empty(),
            headline: first.map(|category| Headline {
                name: category.name.clone(),
                article_count: category.article_count,
            }),
            links: first
                .map(|category| {
                    category
                        .children_categories
                        .iter()
                        .enumerate()
                        .map(|(index, child)| CategoryLink {
                            key: child.render_key(index),
                            name: child.name.clone(),
                            href: child.href(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            groups,
            search: state.search.clone(),
            page: state.page,
            total_pages: total_pages(matched, state.page_size),
            matched,
            prev_page: prev_page(state.page),
            next_page: next_page(state.page),
        }
    }

    /// All cards on the current page, across categories
    pub fn cards(&self) -> impl Iterator<Item = &ArticleCard> {
        self.groups.iter().flat_map(|group| group.cards.iter())
    }
}
