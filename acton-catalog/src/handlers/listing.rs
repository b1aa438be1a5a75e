//! The listing page
//!
//! One route serves every user event. A plain request (first visit, or the
//! loading page polling for data) gets the full page; an HTMX request aimed
//! at `#listing` (a keystroke in the search box or a pagination click) gets
//! only the listing region.
//!
//! The loading page polls only while the fetch is pending. A failed or
//! cancelled fetch is never retried, so its page stops polling and keeps
//! the "Loading..." placeholders.

use axum::{
    extract::{Query, State},
    response::Response,
};
use axum_htmx::{HxRequest, HxTarget};
use tracing::debug;

use crate::listing::{ListingQuery, ListingState, ListingView};
use crate::state::CatalogState;
use crate::template::{HxTemplate, ListingFragment, ListingPage, LISTING_TARGET};

/// Render the listing for the requested search term and page
///
/// Query parameters: `q` (search input, default empty) and `page`
/// (default 1, never clamped).
#[allow(clippy::unused_async)]
pub async fn index(
    State(state): State<CatalogState>,
    HxRequest(is_htmx): HxRequest,
    HxTarget(target): HxTarget,
    Query(query): Query<ListingQuery>,
) -> Response {
    let listing = ListingState::from_query(query, state.config().listing.page_size);
    let categories = state.store().categories();
    let view = ListingView::build(&categories, &listing, state.formatter());

    let fragment = is_htmx && target.as_deref() == Some(LISTING_TARGET);

    if state.observability().log_renders {
        debug!(
            search = %view.search,
            page = view.page,
            matched = view.matched,
            total_pages = view.total_pages,
            loading = view.is_loading,
            fragment,
            "Rendering listing"
        );
    }

    if fragment {
        ListingFragment { view: &view }.render_html()
    } else {
        ListingPage {
            view: &view,
            storefront: &state.config().storefront,
            poll: state.store().is_pending(),
            poll_interval_ms: state.config().htmx.poll_interval_ms,
        }
        .render_html()
    }
}
