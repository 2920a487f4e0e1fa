use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{LoginData, SignUpData};
use crate::types::response;
use crate::utils::validate;

#[instrument(skip(state, data))]
pub(crate) async fn sign_up(
    State(state): State<AppState>,
    Json(data): Json<SignUpData>,
) -> Result<(StatusCode, Json<response::User>), Error> {
    validate::check(&data)?;

    let user = state
        .auth_controller
        .sign_up(&data.username, &data.password)
        .await?;

    Ok((StatusCode::CREATED, Json(response::User::from(&user))))
}

#[instrument(skip(state, data))]
pub(crate) async fn sign_in(
    State(state): State<AppState>,
    Json(data): Json<LoginData>,
) -> Result<Json<response::SignIn>, Error> {
    let user = state
        .auth_controller
        .validate_user(&data.username, &data.password)
        .await?
        .ok_or(Error::Unauthorized)?;

    let session = state.auth_controller.sign_in(&user)?;

    Ok(Json(session))
}
