use actix_web::{web, HttpResponse, Responder};
use common::model::template::Template;
use log::{error, info};

use crate::db::TemplateStore;

pub async fn process(
    path: web::Path<(String, String)>,
    payload: web::Json<Template>,
    store: web::Data<TemplateStore>,
) -> impl Responder {
    let (vendor_id, page) = path.into_inner();
    let page = match super::parse_page(&page) {
        Ok(page) => page,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    if payload.vendor_id != vendor_id || payload.page != page {
        return HttpResponse::BadRequest()
            .body("Template vendorId and page must match the path");
    }

    match store.save(&payload) {
        Ok(()) => {
            info!("Saved template {}/{}", vendor_id, page);
            HttpResponse::Ok().body("Template saved")
        }
        Err(e) => {
            error!("Saving template {}/{} failed: {}", vendor_id, page, e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving template: {}", e))
        }
    }
}
