use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

use super::store_error_response;

#[derive(Deserialize)]
pub struct PostListQuery {
    limit: Option<u32>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/posts").route(web::get().to(list_posts)));
    cfg.service(web::resource("/api/posts/{slug}").route(web::get().to(get_post)));
}

async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> impl Responder {
    match state.store.get_posts(query.limit).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => store_error_response(e),
    }
}

async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match state.store.get_post_by_slug(&slug).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => store_error_response(e),
    }
}
