use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::types::swipe::SwipeType;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct SignUpData {
    #[validate(length(min = 3, max = 20, message = "username must be 3-20 characters"))]
    pub(crate) username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePasswordData {
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub(crate) new_password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewProfile {
    #[validate(length(min = 1, max = 50, message = "display name must be 1-50 characters"))]
    pub(crate) display_name: String,
    #[validate(range(min = 18, max = 120, message = "age must be between 18 and 120"))]
    pub(crate) age: i16,
    #[validate(length(min = 1, max = 20, message = "gender must be 1-20 characters"))]
    pub(crate) gender: String,
    #[validate(length(max = 500, message = "bio must be at most 500 characters"))]
    pub(crate) bio: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProfile {
    #[validate(length(min = 1, max = 50, message = "display name must be 1-50 characters"))]
    pub(crate) display_name: Option<String>,
    #[validate(range(min = 18, max = 120, message = "age must be between 18 and 120"))]
    pub(crate) age: Option<i16>,
    #[validate(length(min = 1, max = 20, message = "gender must be 1-20 characters"))]
    pub(crate) gender: Option<String>,
    #[validate(length(max = 500, message = "bio must be at most 500 characters"))]
    pub(crate) bio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewSwipe {
    pub(crate) profile_id: Uuid,
    pub(crate) swipe_type: SwipeType,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewSubscription {
    #[validate(length(min = 1, max = 50, message = "plan must be 1-50 characters"))]
    pub(crate) plan: String,
    pub(crate) expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateSubscription {
    #[validate(length(min = 1, max = 50, message = "plan must be 1-50 characters"))]
    pub(crate) plan: Option<String>,
    pub(crate) expires_at: Option<DateTime<Utc>>,
}
