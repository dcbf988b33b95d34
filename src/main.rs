use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use casa_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = Arc::new(
        AppState::new(config)
            .await
            .expect("failed to initialise application state"),
    );

    log::info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::chat_handler::send_chat_message)
            .service(handlers::chat_handler::chat_history)
            .service(handlers::campus_handler::list_events)
            .service(handlers::campus_handler::list_deadlines)
            .service(handlers::campus_handler::list_tutoring_sessions)
            .service(handlers::campus_handler::health_check)
    })
    .bind(bind_addr)?
    .run()
    .await
}
