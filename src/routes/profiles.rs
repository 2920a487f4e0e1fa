use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use axum_macros::debug_handler;
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::profile::Profile;
use crate::types::request::{NewProfile, UpdateProfile};
use crate::types::user::User;
use crate::utils::validate;

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, Error> {
    let profiles = state.profile_controller.find_all().await?;

    Ok(Json(profiles))
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, Error> {
    let profile = state
        .profile_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::ProfileNotFound)?;

    Ok(Json(profile))
}

// The path id is the browsing user, not a profile id.
#[debug_handler]
#[instrument(skip(state))]
pub(crate) async fn stack(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Profile>>, Error> {
    state
        .user_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::UserNotFound)?;

    let profiles = state.profile_controller.find_stack(id).await?;

    Ok(Json(profiles))
}

#[instrument(skip(state, user))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(params): Json<NewProfile>,
) -> Result<(StatusCode, Json<Profile>), Error> {
    validate::check(&params)?;

    let profile = state.profile_controller.create(user.id, &params).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state, user))]
pub(crate) async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateProfile>,
) -> Result<Json<Profile>, Error> {
    validate::check(&params)?;

    let profile = state
        .profile_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::ProfileNotFound)?;

    if profile.user_id != user.id {
        return Err(Error::Forbidden);
    }

    let profile = state.profile_controller.update(id, &params).await?;

    Ok(Json(profile))
}

#[instrument(skip(state, user))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let profile = state
        .profile_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::ProfileNotFound)?;

    if profile.user_id != user.id {
        return Err(Error::Forbidden);
    }

    state.profile_controller.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
