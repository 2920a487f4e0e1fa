use sqlx::postgres::PgPool;

use crate::controllers::auth::AuthController;
use crate::controllers::profile::ProfileController;
use crate::controllers::subscription::SubscriptionController;
use crate::controllers::swipe::SwipeController;
use crate::controllers::user::UserController;
use crate::core::error::ConfigError;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) auth_controller: AuthController,
    pub(crate) user_controller: UserController,
    pub(crate) profile_controller: ProfileController,
    pub(crate) swipe_controller: SwipeController,
    pub(crate) subscription_controller: SubscriptionController,
}

impl AppState {
    pub(crate) fn new(
        pool: PgPool,
        secret: String,
        token_expiry_hours: i64,
    ) -> Result<Self, ConfigError> {
        let user_controller = UserController::new(pool.clone())?;

        Ok(AppState {
            auth_controller: AuthController::new(
                user_controller.clone(),
                secret,
                token_expiry_hours,
            ),
            user_controller,
            profile_controller: ProfileController::new(pool.clone()),
            swipe_controller: SwipeController::new(pool.clone()),
            subscription_controller: SubscriptionController::new(pool),
        })
    }
}
