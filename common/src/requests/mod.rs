//! REST paths shared by the frontend client and the backend router.

use crate::model::page::Page;

/// Prefix all vendor template routes live under.
pub const VENDORS_API_PATH: &str = "/api/vendors";

/// `GET` returns the snapshot for a vendor page, `POST` stores one.
pub fn template_snapshot_path(vendor_id: &str, page: Page) -> String {
    format!("{VENDORS_API_PATH}/{vendor_id}/templates/{page}")
}
