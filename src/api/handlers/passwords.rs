// src/api/handlers/passwords.rs
use actix_session::Session;
use actix_web::{web, HttpResponse};
use log::debug;

use crate::api::session::{load_store, save_store};
use crate::api::types::{SaveRequest, SavedPasswordsResponse, SuccessResponse};

/// Save a password
///
/// Appends a (site, password) record to this session's saved list.
#[utoipa::path(
    post,
    path = "/save",
    tag = "Passwords",
    request_body = SaveRequest,
    responses(
        (status = 200, description = "Password saved", body = SuccessResponse),
        (status = 400, description = "Missing site name or password", body = SuccessResponse)
    )
)]
pub async fn save_password(
    session: Session,
    save_req: web::Json<SaveRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut store = load_store(&session)?;

    let site_name = save_req.site_name.as_deref().unwrap_or("");
    let password = save_req.password.as_deref().unwrap_or("");

    match store.append(site_name, password) {
        Ok(record) => {
            save_store(&session, &store)?;
            debug!("saved password {} for {}", record.id, record.site_name);
            Ok(HttpResponse::Ok().json(SuccessResponse {
                success: true,
                error: None,
            }))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(SuccessResponse {
            success: false,
            error: Some(e.to_string()),
        })),
    }
}

/// List saved passwords
///
/// Returns this session's saved passwords, newest first.
#[utoipa::path(
    get,
    path = "/saved",
    tag = "Passwords",
    responses(
        (status = 200, description = "Saved passwords, newest first", body = SavedPasswordsResponse)
    )
)]
pub async fn saved_passwords(session: Session) -> Result<HttpResponse, actix_web::Error> {
    let store = load_store(&session)?;

    Ok(HttpResponse::Ok().json(SavedPasswordsResponse {
        passwords: store.list(),
    }))
}

/// Delete a saved password
///
/// Removes the record with the given id. Ids that are not present in a
/// non-empty session are tolerated and reported as success.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Passwords",
    params(
        ("id" = u64, Path, description = "Record id to delete")
    ),
    responses(
        (status = 200, description = "Password deleted", body = SuccessResponse),
        (status = 404, description = "Session has no saved passwords", body = SuccessResponse)
    )
)]
pub async fn delete_password(
    session: Session,
    path: web::Path<u64>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = path.into_inner();
    let mut store = load_store(&session)?;

    match store.delete(id) {
        Ok(()) => {
            save_store(&session, &store)?;
            debug!("deleted password {} ({} remaining)", id, store.len());
            Ok(HttpResponse::Ok().json(SuccessResponse {
                success: true,
                error: None,
            }))
        }
        Err(e) => Ok(HttpResponse::NotFound().json(SuccessResponse {
            success: false,
            error: Some(e.to_string()),
        })),
    }
}
