//! GraphQL transport for the catalog
//!
//! Builds the categories query from configuration, POSTs it as
//! `{"query": "..."}` and decodes `{"data": {"categories": [...]}}`.
//!
//! The [`CatalogSource`] trait is the seam between the loader and the
//! network; [`GraphQlClient`] is the production implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GraphQlSettings;
use crate::error::{CatalogError, CatalogResult};
use crate::model::Category;

/// Parameters interpolated into the categories query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category id(s)
    pub category_ids: String,
    /// Locale enum value
    pub locale: String,
    /// `first:` argument of `categoryArticles`
    pub article_limit: u32,
    /// Image format enum value
    pub image_format: String,
    /// Maximum image width
    pub image_max_width: u32,
    /// Maximum image height
    pub image_max_height: u32,
    /// Images per article
    pub image_limit: u32,
}

impl CatalogQuery {
    /// Query parameters from the `[graphql]` configuration section
    #[must_use]
    pub fn from_settings(settings: &GraphQlSettings) -> Self {
        Self {
            category_ids: settings.category_ids.clone(),
            locale: settings.locale.clone(),
            article_limit: settings.article_limit,
            image_format: settings.image_format.clone(),
            image_max_width: settings.image_max_width,
            image_max_height: settings.image_max_height,
            image_limit: settings.image_limit,
        }
    }

    /// The GraphQL document sent to the endpoint
    #[must_use]
    pub fn document(&self) -> String {
        format!(
            r#"{{
  categories(ids: "{ids}", locale: {locale}) {{
    name
    articleCount
    childrenCategories {{
      name
      urlPath
    }}
    categoryArticles(first: {first}) {{
      articles {{
        name
        variantName
        prices {{
          currency
          regular {{
            value
          }}
        }}
        images(
          format: {format}
          maxWidth: {width}
          maxHeight: {height}
          limit: {limit}
        ) {{
          path
        }}
      }}
    }}
  }}
}}"#,
            ids = self.category_ids.replace('\\', "\\\\").replace('"', "\\\""),
            locale = self.locale,
            first = self.article_limit,
            format = self.image_format,
            width = self.image_max_width,
            height = self.image_max_height,
            limit = self.image_limit,
        )
    }
}

/// Request body
#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    /// GraphQL document
    pub query: String,
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Payload, absent when the query failed
    pub data: Option<T>,

    /// Errors reported by the server
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message
    pub message: String,
}

/// `data` of the categories query
#[derive(Debug, Deserialize)]
pub struct CategoriesData {
    /// Fetched categories
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Decode a response body into the category list
///
/// # Errors
///
/// - [`CatalogError::Decode`] for malformed JSON or an unexpected shape
/// - [`CatalogError::GraphQl`] when the server reports errors and no data
/// - [`CatalogError::MissingData`] when there is neither data nor errors
pub fn decode_categories(body: &str) -> CatalogResult<Vec<Category>> {
    let response: GraphQlResponse<CategoriesData> = serde_json::from_str(body)?;
    match response.data {
        Some(data) => {
            if !response.errors.is_empty() {
                tracing::warn!(
                    errors = response.errors.len(),
                    "GraphQL response carried partial errors"
                );
            }
            Ok(data.categories)
        }
        None if response.errors.is_empty() => Err(CatalogError::MissingData),
        None => Err(CatalogError::GraphQl(
            response.errors.into_iter().map(|error| error.message).collect(),
        )),
    }
}

/// Source of the category list
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the categories once
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the response is unusable.
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>>;
}

/// reqwest-backed GraphQL client
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: String,
    query: CatalogQuery,
}

impl GraphQlClient {
    /// Build a client from the `[graphql]` configuration section
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built.
    pub fn from_settings(settings: &GraphQlSettings) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            query: CatalogQuery::from_settings(settings),
        })
    }

    /// Endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for GraphQlClient {
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let request = GraphQlRequest {
            query: self.query.document(),
        };

        tracing::debug!(endpoint = %self.endpoint, "Sending catalog query");

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_categories(&body)
    }
}
