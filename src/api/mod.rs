// src/api/mod.rs
use actix_cors::Cors;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // Saved-password endpoints
        crate::api::handlers::passwords::save_password,
        crate::api::handlers::passwords::saved_passwords,
        crate::api::handlers::passwords::delete_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateOptions,
            crate::api::types::GenerateResponse,
            crate::api::types::SaveRequest,
            crate::api::types::SuccessResponse,
            crate::api::types::SavedPasswordsResponse,
            crate::api::types::HealthResponse,

            // Password models
            crate::models::PasswordRecord
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Passwords", description = "Per-session saved password endpoints"),
        (name = "System", description = "Service status endpoints")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Secure password generator with per-session saved passwords",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!("Starting passforge API server on port {}", config.web_port);

    let bind_address = (config.web_address.clone(), config.web_port);
    // One signing key per process; every worker signs the same cookies.
    let session_key = config.session_key();
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .supports_credentials()
            .max_age(3600);

        // Cookie-backed session, the only persistence this service has
        let session =
            SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                .cookie_name("passforge_session".to_string())
                .cookie_secure(false)
                .build();

        App::new()
            .wrap(cors)
            .wrap(session)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod session;
