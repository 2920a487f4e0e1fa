use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::UpdatePasswordData;
use crate::types::response;
use crate::types::user::User;
use crate::utils::validate;

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<response::User>, Error> {
    let user = state
        .user_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::UserNotFound)?;

    Ok(Json(response::User::from(&user)))
}

#[instrument(skip(state, user, params))]
pub(crate) async fn update_password(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdatePasswordData>,
) -> Result<Json<&'static str>, Error> {
    if user.id != id {
        return Err(Error::Forbidden);
    }

    validate::check(&params)?;

    let password_hash = state.auth_controller.hash(&params.new_password)?;

    state
        .user_controller
        .update_password(id, &password_hash)
        .await?;

    Ok(Json("Password updated successfully"))
}

#[instrument(skip(state, user))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    if user.id != id {
        return Err(Error::Forbidden);
    }

    state.user_controller.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
