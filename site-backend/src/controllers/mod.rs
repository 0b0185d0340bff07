//! HTTP route handlers
//!
//! Each controller registers its routes via `config(cfg)` and maps store
//! failures onto JSON error responses.

pub mod events;
pub mod feed;
pub mod health;
pub mod media;
pub mod posts;
pub mod talks;
pub mod videos;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::store::StoreError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a store failure onto an HTTP response. A missing slug becomes a 404
/// so the frontend can render its not-found page; everything else
/// (including an ambiguous slug) is a 500.
pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound { .. } => HttpResponse::NotFound().json(ErrorResponse {
            error: err.to_string(),
        }),
        _ => {
            log::error!("Store read failed: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal server error".to_string(),
            })
        }
    }
}
