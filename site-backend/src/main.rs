use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod feed;
mod models;
mod store;

use config::Config;
use store::StoreClient;

pub struct AppState {
    pub store: Arc<StoreClient>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Connecting store client to {}", config.supabase_url);
    let store = StoreClient::new(&config.supabase_url, &config.supabase_anon_key)
        .expect("SUPABASE_URL must be a valid URL");
    let store = Arc::new(store);

    log::info!("Starting site backend on port {}", port);
    log::info!("Feed available at /rss.xml");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::posts::config)
            .configure(controllers::events::config)
            .configure(controllers::talks::config)
            .configure(controllers::videos::config)
            .configure(controllers::media::config)
            .configure(controllers::feed::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
