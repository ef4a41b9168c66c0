//! Session extractor
//!
//! Clients carry their session handle in the `x-session-id` header, as
//! returned by `POST /api/session`.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use crate::core::ServerState;
use crate::session::Session;

pub const SESSION_HEADER: &str = "x-session-id";

/// Session handle plus a snapshot taken when the request arrived
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: Uuid,
    pub session: Session,
}

impl FromRequestParts<ServerState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::SessionNotFound,
                    format!("Missing {} header", SESSION_HEADER),
                )
            })?;

        let id = Uuid::parse_str(raw.trim()).map_err(|_| {
            AppError::invalid_request(format!("Malformed {} header", SESSION_HEADER))
                .with_detail("value", raw)
        })?;

        let session = state.sessions.get(id)?;
        Ok(Self { id, session })
    }
}
