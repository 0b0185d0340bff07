use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

use super::store_error_response;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/books").route(web::get().to(list_books)));
    cfg.service(web::resource("/api/anime").route(web::get().to(list_anime)));
    cfg.service(web::resource("/api/achievements").route(web::get().to(list_achievements)));
}

async fn list_books(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_books().await {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(e) => store_error_response(e),
    }
}

async fn list_anime(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_anime().await {
        Ok(anime) => HttpResponse::Ok().json(anime),
        Err(e) => store_error_response(e),
    }
}

async fn list_achievements(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_gaming_achievements().await {
        Ok(achievements) => HttpResponse::Ok().json(achievements),
        Err(e) => store_error_response(e),
    }
}
