use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{NewSubscription, UpdateSubscription};
use crate::types::subscription::Subscription;
use crate::types::user::User;
use crate::utils::validate;

#[instrument(skip(state, user))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Subscription>>, Error> {
    let subscriptions = state
        .subscription_controller
        .find_for_user(user.id)
        .await?;

    Ok(Json(subscriptions))
}

#[instrument(skip(state, user))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Subscription>, Error> {
    let subscription = state
        .subscription_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::SubscriptionNotFound)?;

    if subscription.user_id != user.id {
        return Err(Error::Forbidden);
    }

    Ok(Json(subscription))
}

#[instrument(skip(state, user))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(params): Json<NewSubscription>,
) -> Result<(StatusCode, Json<Subscription>), Error> {
    validate::check(&params)?;

    let subscription = state
        .subscription_controller
        .create(user.id, &params)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

#[instrument(skip(state, user))]
pub(crate) async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateSubscription>,
) -> Result<Json<Subscription>, Error> {
    validate::check(&params)?;

    let subscription = state
        .subscription_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::SubscriptionNotFound)?;

    if subscription.user_id != user.id {
        return Err(Error::Forbidden);
    }

    let subscription = state.subscription_controller.update(id, &params).await?;

    Ok(Json(subscription))
}

#[instrument(skip(state, user))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let subscription = state
        .subscription_controller
        .find_by_id(id)
        .await?
        .ok_or(Error::SubscriptionNotFound)?;

    if subscription.user_id != user.id {
        return Err(Error::Forbidden);
    }

    state.subscription_controller.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
