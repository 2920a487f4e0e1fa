use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::request::{NewSubscription, UpdateSubscription};
use crate::types::subscription::Subscription;

#[derive(Clone, Debug)]
pub(crate) struct SubscriptionController {
    pool: PgPool,
}

impl SubscriptionController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create(
        &self,
        user_id: Uuid,
        subscription: &NewSubscription,
    ) -> Result<Subscription, Error> {
        let subscription = sqlx::query(
            "INSERT INTO subscriptions (user_id, plan, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, plan, expires_at, created_at, modified_at;",
        )
        .bind(user_id)
        .bind(&subscription.plan)
        .bind(subscription.expires_at)
        .map(map_subscription)
        .fetch_one(&self.pool)
        .await?;

        Ok(subscription)
    }

    pub(crate) async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscription>, Error> {
        match sqlx::query(
            "SELECT id, user_id, plan, expires_at, created_at, modified_at
            FROM subscriptions
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_subscription)
        .fetch_one(&self.pool)
        .await
        {
            Ok(subscription) => Ok(Some(subscription)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Subscription>, Error> {
        let subscriptions = sqlx::query(
            "SELECT id, user_id, plan, expires_at, created_at, modified_at
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY created_at DESC;",
        )
        .bind(user_id)
        .map(map_subscription)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions)
    }

    pub(crate) async fn update(
        &self,
        id: Uuid,
        patch: &UpdateSubscription,
    ) -> Result<Subscription, Error> {
        match sqlx::query(
            "UPDATE subscriptions SET
                plan = COALESCE($2, plan),
                expires_at = COALESCE($3, expires_at),
                modified_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, plan, expires_at, created_at, modified_at;",
        )
        .bind(id)
        .bind(&patch.plan)
        .bind(patch.expires_at)
        .map(map_subscription)
        .fetch_one(&self.pool)
        .await
        {
            Ok(subscription) => Ok(subscription),
            Err(sqlx::Error::RowNotFound) => Err(Error::SubscriptionNotFound),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn delete(&self, id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::SubscriptionNotFound);
        }

        Ok(())
    }
}

fn map_subscription(row: PgRow) -> Subscription {
    Subscription {
        id: row.get("id"),
        user_id: row.get("user_id"),
        plan: row.get("plan"),
        expires_at: row.get("expires_at"),
        created_at: row.get("created_at"),
        modified_at: row.get("modified_at"),
    }
}
