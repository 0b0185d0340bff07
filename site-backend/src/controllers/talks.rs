use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

use super::store_error_response;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/talks").route(web::get().to(list_talks)));
    cfg.service(web::resource("/api/talks/{slug}").route(web::get().to(get_talk)));
    cfg.service(web::resource("/api/talks/{slug}/events").route(web::get().to(list_talk_events)));
}

async fn list_talks(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_talks().await {
        Ok(talks) => HttpResponse::Ok().json(talks),
        Err(e) => store_error_response(e),
    }
}

async fn get_talk(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match state.store.get_talk_by_slug(&slug).await {
        Ok(talk) => HttpResponse::Ok().json(talk),
        Err(e) => store_error_response(e),
    }
}

/// Events where a talk was (or will be) given, soonest first.
async fn list_talk_events(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match state.store.get_events_by_talk_slug(&slug).await {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => store_error_response(e),
    }
}
