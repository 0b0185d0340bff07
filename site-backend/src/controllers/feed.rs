use actix_web::{web, HttpResponse, Responder};

use crate::feed;
use crate::AppState;

use super::store_error_response;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/rss.xml").route(web::get().to(rss_xml)));
}

/// Serve the blog feed. Rendered fresh on every request; the cache header
/// tells clients not to cache while letting shared caches hold it for an
/// hour (the static build pass captures this route once at deploy time).
async fn rss_xml(state: web::Data<AppState>) -> impl Responder {
    match feed::build_feed(&state.store, &state.config.site_base_url).await {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml")
            .insert_header(("Cache-Control", "max-age=0, s-maxage=3600"))
            .body(xml),
        Err(e) => store_error_response(e),
    }
}
