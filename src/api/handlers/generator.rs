// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;
use crate::api::types::{GenerateRequest, GenerateResponse};

/// Generate a secure password
///
/// Generates a password from the requested character classes using the
/// operating system CSPRNG.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid generation request", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<GenerateRequest>,
) -> impl Responder {
    // Negative lengths funnel into the zero case so the generator reports
    // them as one invalid-length policy error.
    let length = match generation_req.length {
        Some(l) if l < 0 => 0,
        Some(l) => l as usize,
        None => config.default_password_length,
    };

    let opts = generation_req.options.clone().unwrap_or_default();
    let options = GenerationOptions {
        length,
        include_uppercase: opts.uppercase.unwrap_or(true),
        include_lowercase: opts.lowercase.unwrap_or(true),
        include_numbers: opts.numbers.unwrap_or(true),
        include_special: opts.special.unwrap_or(true),
    };

    let generator = PasswordGenerator::new();
    match generator.generate(&options) {
        Ok(password) => {
            debug!("generated a {}-character password", options.length);
            HttpResponse::Ok().json(GenerateResponse {
                success: true,
                password: Some(password),
                error: None,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(GenerateResponse {
            success: false,
            password: None,
            error: Some(e.to_string()),
        }),
    }
}
