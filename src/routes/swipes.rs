use axum::extract::{Extension, Json, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::NewSwipe;
use crate::types::swipe::Swipe;
use crate::types::user::User;

#[instrument(skip(state, user))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(params): Json<NewSwipe>,
) -> Result<(StatusCode, Json<Swipe>), Error> {
    state
        .profile_controller
        .find_by_id(params.profile_id)
        .await?
        .ok_or(Error::ProfileNotFound)?;

    let swipe = state
        .swipe_controller
        .create(user.id, params.profile_id, params.swipe_type)
        .await?;

    Ok((StatusCode::CREATED, Json(swipe)))
}

#[instrument(skip(state, user))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Swipe>>, Error> {
    let swipes = state.swipe_controller.find_for_user(user.id).await?;

    Ok(Json(swipes))
}
