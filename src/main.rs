use actix_cors::Cors;
use actix_web::{error, get, middleware, web, App, HttpResponse, HttpServer, Responder, Result};
use serde::Serialize;

use crate::config::Config;
use crate::models::todo::ErrorDetail;
use crate::repository::database::Database;

mod api;
mod config;
mod models;
mod repository;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = ErrorDetail {
            detail: err.to_string(),
        };
        error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(detail))
            .into()
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::new();
    let todo_db = Database::new(&config);
    let app_data = web::Data::new(todo_db);

    log::info!("starting todo API on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(json_config())
            .configure(api::api::config)
            .service(healthcheck)
            .default_service(web::route().to(not_found))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
