//! Catalog data model
//!
//! Mirrors the shape returned by the GraphQL `categories` query. Field names
//! are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// A named grouping of articles with child categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Display name
    pub name: String,

    /// Total number of articles the server reports for this category
    pub article_count: u64,

    /// Sub-categories shown as navigation links
    #[serde(default)]
    pub children_categories: Vec<ChildCategory>,

    /// The (server-side limited) article collection
    pub category_articles: CategoryArticles,
}

impl Category {
    /// Articles in source order
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.category_articles.articles
    }
}

/// Sub-category link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildCategory {
    /// Display name
    pub name: String,

    /// Path segment relative to the site root
    pub url_path: String,
}

impl ChildCategory {
    /// Root-relative link target
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.url_path.trim_start_matches('/'))
    }

    /// Stable identity for list rendering
    #[must_use]
    pub fn render_key(&self, index: usize) -> String {
        format!("category-{index}-{}", slug(&self.url_path))
    }
}

/// Article collection wrapper
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryArticles {
    /// Articles in source order
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Display name; the search term is matched against it
    pub name: String,

    /// Variant label, absent for single-variant products
    #[serde(default)]
    pub variant_name: Option<String>,

    /// Price information
    pub prices: Prices,

    /// Images; only the first is rendered
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Article {
    /// The image shown on the card
    #[must_use]
    pub fn primary_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Regular price in minor currency units
    #[must_use]
    pub const fn regular_price(&self) -> i64 {
        self.prices.regular.value
    }

    /// Stable identity for list rendering, derived from position and name
    #[must_use]
    pub fn render_key(&self, index: usize) -> String {
        format!("article-{index}-{}", slug(&self.name))
    }
}

/// Price block of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    /// Currency code reported by the server (not used for display)
    pub currency: String,

    /// Regular price
    pub regular: Money,
}

/// Amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// e.g. cents for EUR
    pub value: i64,
}

/// Article image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute or root-relative image URL
    pub path: String,
}

fn slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
