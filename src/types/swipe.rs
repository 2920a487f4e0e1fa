use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swipe_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub(crate) enum SwipeType {
    Like,
    Pass,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Swipe {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) profile_id: Uuid,
    pub(crate) swipe_type: SwipeType,
    pub(crate) created_at: DateTime<Utc>,
}
