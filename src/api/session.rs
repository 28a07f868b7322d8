// src/api/session.rs
//
// The session cookie is the only persistence this service has: the whole
// SessionStore value is serialized under a fixed key and must be written
// back after every mutation, or the change is lost with the response.

use actix_session::Session;

use crate::core::store::SessionStore;

/// Key under which a session's saved passwords are stored.
pub const SAVED_PASSWORDS_KEY: &str = "saved_passwords";

/// Read this session's store, or an empty one for a fresh session.
pub fn load_store(session: &Session) -> Result<SessionStore, actix_web::Error> {
    Ok(session
        .get::<SessionStore>(SAVED_PASSWORDS_KEY)?
        .unwrap_or_default())
}

/// Write the store back into the session cookie.
pub fn save_store(session: &Session, store: &SessionStore) -> Result<(), actix_web::Error> {
    session.insert(SAVED_PASSWORDS_KEY, store)?;
    Ok(())
}
