//! Auth handlers: register, login, checkSession, logout.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use schoolauth_core::error::AppError;
use schoolauth_entity::session::SessionProfile;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LOGOUT_SUCCESS, MessageResponse, REGISTER_COMPLETE};
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// Unwrap a JSON body, turning any rejection into `bad_data`.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(inner)| inner).map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ApiError::from(AppError::bad_data("Malformed request body"))
    })
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = json_body(body)?;
    state.auth_service.register(req.into()).await?;
    Ok(Json(MessageResponse::new(REGISTER_COMPLETE)))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    session: CurrentSession,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<SessionProfile>), ApiError> {
    let req = json_body(body)?;
    let outcome = state
        .auth_service
        .login(&req.login, &req.password, session.token.as_ref())
        .await?;

    let jar = session.with_token(&state.config.session, &outcome.token);
    Ok((jar, Json(outcome.profile)))
}

/// GET /api/checkSession
pub async fn check_session(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Json<Option<SessionProfile>> {
    Json(state.auth_service.check_session(session.token.as_ref()).await)
}

/// GET /api/logout
///
/// The cookie is cleared whatever the backend says.
pub async fn logout(State(state): State<AppState>, session: CurrentSession) -> Response {
    let result = state.auth_service.logout(session.token.as_ref()).await;
    let jar = session.cleared(&state.config.session);

    match result {
        Ok(()) => (jar, Json(MessageResponse::new(LOGOUT_SUCCESS))).into_response(),
        Err(e) => (jar, ApiError::from(e)).into_response(),
    }
}
