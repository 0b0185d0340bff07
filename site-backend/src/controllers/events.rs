use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

use super::store_error_response;

#[derive(Deserialize)]
pub struct EventListQuery {
    upcoming: Option<bool>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/events").route(web::get().to(list_events)));
}

/// Defaults to the upcoming window when the query flag is absent.
async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<EventListQuery>,
) -> impl Responder {
    let upcoming = query.upcoming.unwrap_or(true);
    match state.store.get_events(upcoming).await {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => store_error_response(e),
    }
}
