//! # Template Snapshot Service
//!
//! Serves vendor template snapshots under `/api/vendors`, the one REST
//! contract the admin frontend depends on: fetch a full snapshot by vendor
//! and page, or an error status.
//!
//! ## Sub-modules:
//! - `get`: loads the snapshot for a vendor page.
//! - `save`: stores a snapshot posted by the editor.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::page::Page;
use common::requests::VENDORS_API_PATH;

/// Configures and returns the Actix `Scope` for template snapshot routes.
///
/// # Registered Routes:
///
/// *   **`GET /{vendor_id}/templates/{page}`** → `get::process`.
///     `200` with the `Template` JSON, `404` when none is stored, `400` for an
///     unknown page or `full`, `503` on database failure.
///
/// *   **`POST /{vendor_id}/templates/{page}`** → `save::process`.
///     Body is a `Template` whose `vendorId` and `page` must match the path.
pub fn configure_routes() -> Scope {
    scope(VENDORS_API_PATH)
        .route("/{vendor_id}/templates/{page}", get().to(get::process))
        .route("/{vendor_id}/templates/{page}", post().to(save::process))
}

/// Parses the `{page}` path segment. `full` only exists as a preview message
/// wildcard; no snapshot is stored under it.
fn parse_page(raw: &str) -> Result<Page, String> {
    match raw.parse::<Page>()? {
        Page::Full => Err("`full` is not a template page".to_string()),
        page => Ok(page),
    }
}
