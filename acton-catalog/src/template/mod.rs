//! Askama templates for the listing page
//!
//! The full page ([`ListingPage`]) and the swappable `#listing` region
//! ([`ListingFragment`]) render from the same [`ListingView`]; the full page
//! includes the fragment template, so both always agree.
//!
//! ```rust
//! use acton_catalog::listing::{ListingState, ListingView};
//! use acton_catalog::pricing::PriceFormatter;
//! use acton_catalog::template::ListingFragment;
//! use askama::Template;
//!
//! let view = ListingView::build(&[], &ListingState::new(10), &PriceFormatter::default());
//! let html = ListingFragment { view: &view }.render().unwrap();
//! assert!(html.contains(r#"id="listing""#));
//! ```

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::config::StorefrontSettings;
use crate::error::CatalogError;
use crate::listing::ListingView;

/// Element id of the region HTMX swaps on search and pagination
pub const LISTING_TARGET: &str = "listing";

/// Extension trait rendering Askama templates into axum responses
pub trait HxTemplate: Template {
    /// Render as an HTML response
    ///
    /// A rendering failure is logged and answered with `500 Internal Server Error`.
    fn render_html(&self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => CatalogError::from(err).into_response(),
        }
    }
}

impl<T> HxTemplate for T where T: Template {}

/// Full listing page: header, sidebar, listing region and footer
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage<'a> {
    /// Computed listing
    pub view: &'a ListingView,

    /// Static page copy
    pub storefront: &'a StorefrontSettings,

    /// Keep polling for the catalog; only while the fetch is pending
    pub poll: bool,

    /// Poll interval while the catalog is loading
    pub poll_interval_ms: u64,
}

/// The `#listing` region alone: article grid, pagination strip, page state
#[derive(Template)]
#[template(path = "_listing.html")]
pub struct ListingFragment<'a> {
    /// Computed listing
    pub view: &'a ListingView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingState;
    use crate::pricing::PriceFormatter;
    use crate::testing::fixtures::sample_catalog;
    use axum::http::StatusCode;

    fn page(view: &ListingView) -> String {
        render_page(view, view.is_loading)
    }

    fn render_page(view: &ListingView, poll: bool) -> String {
        ListingPage {
            view,
            storefront: &StorefrontSettings::default(),
            poll,
            poll_interval_ms: 1000,
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_loading_page_shows_placeholders_and_polls() {
        let view = ListingView::build(&[], &ListingState::new(10), &PriceFormatter::default());
        let html = page(&view);

        assert_eq!(html.matches("Loading...").count(), 2);
        assert!(html.contains(r#"hx-trigger="every 1000ms""#));
    }

    #[test]
    fn test_settled_empty_page_keeps_placeholders_without_polling() {
        let view = ListingView::build(&[], &ListingState::new(10), &PriceFormatter::default());
        let html = render_page(&view, false);

        assert_eq!(html.matches("Loading...").count(), 2);
        assert!(!html.contains("hx-trigger=\"every"));
    }

    #[test]
    fn test_loaded_page_stops_polling() {
        let categories = sample_catalog();
        let view = ListingView::build(&categories, &ListingState::new(10), &PriceFormatter::default());
        let html = page(&view);

        assert!(!html.contains("Loading..."));
        assert!(!html.contains("every 1000ms"));
        assert!(html.contains("Kategorien"));
        assert!(html.contains("Ecksofas"));
        assert!(html.contains("<small> (3)</small>"));
        assert!(html.contains("Alle Preise sind in Euro"));
    }

    #[test]
    fn test_fragment_renders_cards_in_order() {
        let categories = sample_catalog();
        let view = ListingView::build(&categories, &ListingState::new(10), &PriceFormatter::default());
        let html = ListingFragment { view: &view }.render().unwrap();

        let a = html.find("Axyz").unwrap();
        let b = html.find("Bxyz").unwrap();
        let c = html.find("Cxyz").unwrap();
        assert!(a < b && b < c);
        assert!(html.contains("123,45\u{a0}€"));
        assert!(html.contains(r#"alt="Axyz""#));
        assert!(html.contains(r#"id="article-0-axyz""#));
        assert!(html.contains(r#"role="button""#));
        assert!(html.contains("1 / 0"));
    }

    #[test]
    fn test_fragment_carries_page_state() {
        let state = ListingState::new(10).next();
        let view = ListingView::build(&sample_catalog(), &state, &PriceFormatter::default());
        let html = ListingFragment { view: &view }.render().unwrap();

        assert!(html.contains(r#"name="page" value="2""#));
        assert!(html.contains(r#"hx-vals='{"page": 1}'"#));
        assert!(html.contains(r#"hx-vals='{"page": 3}'"#));
    }

    #[test]
    fn test_search_value_is_escaped() {
        let state = ListingState::new(10).with_search("<b>");
        let view = ListingView::build(&sample_catalog(), &state, &PriceFormatter::default());
        let html = page(&view);
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_html_is_ok() {
        let view = ListingView::build(&[], &ListingState::new(10), &PriceFormatter::default());
        let response = ListingFragment { view: &view }.render_html();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
