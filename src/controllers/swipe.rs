use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::swipe::{Swipe, SwipeType};

#[derive(Clone, Debug)]
pub(crate) struct SwipeController {
    pool: PgPool,
}

impl SwipeController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Append-only: one row per swipe action, no updates.
    pub(crate) async fn create(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        swipe_type: SwipeType,
    ) -> Result<Swipe, Error> {
        let swipe = sqlx::query(
            "INSERT INTO swipes (user_id, profile_id, swipe_type)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, profile_id, swipe_type, created_at;",
        )
        .bind(user_id)
        .bind(profile_id)
        .bind(swipe_type)
        .map(map_swipe)
        .fetch_one(&self.pool)
        .await?;

        Ok(swipe)
    }

    pub(crate) async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Swipe>, Error> {
        let swipes = sqlx::query(
            "SELECT id, user_id, profile_id, swipe_type, created_at
            FROM swipes
            WHERE user_id = $1
            ORDER BY created_at DESC;",
        )
        .bind(user_id)
        .map(map_swipe)
        .fetch_all(&self.pool)
        .await?;

        Ok(swipes)
    }
}

fn map_swipe(row: PgRow) -> Swipe {
    Swipe {
        id: row.get("id"),
        user_id: row.get("user_id"),
        profile_id: row.get("profile_id"),
        swipe_type: row.get("swipe_type"),
        created_at: row.get("created_at"),
    }
}
