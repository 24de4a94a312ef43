//! # Template Snapshot Retrieval
//!
//! Backs `GET /api/vendors/{vendor_id}/templates/{page}`. The snapshot is
//! returned exactly as it was last saved.

use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::db::TemplateStore;

/// Actix handler for snapshot reads.
///
/// # Returns
/// - `200 OK` with the `Template` JSON.
/// - `400 Bad Request` for an unknown page name or `full`.
/// - `404 Not Found` when the vendor has no template for the page.
/// - `503 Service Unavailable` when the database cannot be read.
pub async fn process(
    path: web::Path<(String, String)>,
    store: web::Data<TemplateStore>,
) -> impl Responder {
    let (vendor_id, page) = path.into_inner();
    let page = match super::parse_page(&page) {
        Ok(page) => page,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };

    match store.load(&vendor_id, page) {
        Ok(Some(template)) => HttpResponse::Ok().json(template),
        Ok(None) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => {
            error!("Loading template {}/{} failed: {}", vendor_id, page, e);
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving template: {}", e))
        }
    }
}
