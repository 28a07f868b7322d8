// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator
    cfg.route(
        "/generate",
        web::post().to(handlers::generator::generate_password),
    );

    // Saved passwords
    cfg.route("/save", web::post().to(handlers::passwords::save_password));
    cfg.route("/saved", web::get().to(handlers::passwords::saved_passwords));
    cfg.route(
        "/delete/{id}",
        web::delete().to(handlers::passwords::delete_password),
    );

    // System
    cfg.route("/health", web::get().to(handlers::system::health));
}
