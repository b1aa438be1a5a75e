//! Catalog fixtures for unit tests

use crate::model::{Article, Category, CategoryArticles, ChildCategory, Image, Money, Prices};

/// Article priced in EUR minor units with one image derived from its name
pub fn article(name: &str, value: i64) -> Article {
    Article {
        name: name.to_string(),
        variant_name: None,
        prices: Prices {
            currency: "EUR".to_string(),
            regular: Money { value },
        },
        images: vec![Image {
            path: format!("/images/{}.webp", name.to_lowercase().replace(' ', "-")),
        }],
    }
}

/// Category without children whose article count matches its articles
pub fn category(name: &str, articles: Vec<Article>) -> Category {
    Category {
        name: name.to_string(),
        article_count: u64::try_from(articles.len()).unwrap_or(u64::MAX),
        children_categories: Vec::new(),
        category_articles: CategoryArticles { articles },
    }
}

/// One category "Sofas" with two children and articles Axyz, Bxyz, Cxyz
pub fn sample_catalog() -> Vec<Category> {
    let mut sofas = category(
        "Sofas",
        vec![
            article("Axyz", 12345),
            article("Bxyz", 4999),
            article("Cxyz", 100_000),
        ],
    );
    sofas.children_categories = vec![
        ChildCategory {
            name: "Ecksofas".to_string(),
            url_path: "ecksofas".to_string(),
        },
        ChildCategory {
            name: "Schlafsofas".to_string(),
            url_path: "schlafsofas".to_string(),
        },
    ];
    vec![sofas]
}
