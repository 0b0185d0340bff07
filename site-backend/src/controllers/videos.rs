use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

use super::store_error_response;

#[derive(Deserialize)]
pub struct VideoListQuery {
    limit: Option<u32>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/videos").route(web::get().to(list_videos)));
}

async fn list_videos(
    state: web::Data<AppState>,
    query: web::Query<VideoListQuery>,
) -> impl Responder {
    match state.store.get_videos(query.limit).await {
        Ok(videos) => HttpResponse::Ok().json(videos),
        Err(e) => store_error_response(e),
    }
}
