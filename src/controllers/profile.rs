use chrono::{DateTime, Local, NaiveTime};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::profile::Profile;
use crate::types::request::{NewProfile, UpdateProfile};

pub(crate) const PROFILE_STACK_COUNT: i64 = 20;

#[derive(Clone, Debug)]
pub(crate) struct ProfileController {
    pool: PgPool,
}

impl ProfileController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create(
        &self,
        user_id: Uuid,
        profile: &NewProfile,
    ) -> Result<Profile, Error> {
        let profile = sqlx::query(
            "INSERT INTO profiles (user_id, display_name, age, gender, bio)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, display_name, age, gender, bio, created_at, modified_at;",
        )
        .bind(user_id)
        .bind(&profile.display_name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(&profile.bio)
        .map(map_profile)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub(crate) async fn find_all(&self) -> Result<Vec<Profile>, Error> {
        let profiles = sqlx::query(
            "SELECT id, user_id, display_name, age, gender, bio, created_at, modified_at
            FROM profiles;",
        )
        .map(map_profile)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    pub(crate) async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, Error> {
        match sqlx::query(
            "SELECT id, user_id, display_name, age, gender, bio, created_at, modified_at
            FROM profiles
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_profile)
        .fetch_one(&self.pool)
        .await
        {
            Ok(profile) => Ok(Some(profile)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    // Day-bounded and quota-capped: the result depends on the wall clock and
    // on swipes recorded earlier today, so re-invocation can differ.
    pub(crate) async fn find_stack(&self, user_id: Uuid) -> Result<Vec<Profile>, Error> {
        let (day_start, day_end) = day_bounds(Local::now());

        let swipe_count: i64 = sqlx::query(
            "SELECT COUNT(*) AS swipe_count
            FROM swipes
            WHERE user_id = $1 AND created_at BETWEEN $2 AND $3;",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .map(|row: PgRow| row.get("swipe_count"))
        .fetch_one(&self.pool)
        .await?;

        let remaining = remaining_quota(swipe_count);

        if remaining <= 0 {
            return Ok(Vec::new());
        }

        let swiped_profile_ids: Vec<Uuid> = sqlx::query(
            "SELECT profile_id
            FROM swipes
            WHERE user_id = $1 AND created_at BETWEEN $2 AND $3;",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .map(|row: PgRow| row.get("profile_id"))
        .fetch_all(&self.pool)
        .await?;

        let profiles = if swiped_profile_ids.is_empty() {
            sqlx::query(
                "SELECT id, user_id, display_name, age, gender, bio, created_at, modified_at
                FROM profiles
                LIMIT $1;",
            )
            .bind(remaining)
            .map(map_profile)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "SELECT id, user_id, display_name, age, gender, bio, created_at, modified_at
                FROM profiles
                WHERE id <> ALL($1)
                LIMIT $2;",
            )
            .bind(&swiped_profile_ids)
            .bind(remaining)
            .map(map_profile)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(profiles)
    }

    pub(crate) async fn update(&self, id: Uuid, patch: &UpdateProfile) -> Result<Profile, Error> {
        match sqlx::query(
            "UPDATE profiles SET
                display_name = COALESCE($2, display_name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender),
                bio = COALESCE($5, bio),
                modified_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, display_name, age, gender, bio, created_at, modified_at;",
        )
        .bind(id)
        .bind(&patch.display_name)
        .bind(patch.age)
        .bind(&patch.gender)
        .bind(&patch.bio)
        .map(map_profile)
        .fetch_one(&self.pool)
        .await
        {
            Ok(profile) => Ok(profile),
            Err(sqlx::Error::RowNotFound) => Err(Error::ProfileNotFound),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn delete(&self, id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::ProfileNotFound);
        }

        Ok(())
    }
}

fn remaining_quota(swipe_count: i64) -> i64 {
    PROFILE_STACK_COUNT - swipe_count
}

fn day_bounds(now: DateTime<Local>) -> (DateTime<Local>, DateTime<Local>) {
    let start = now.with_time(NaiveTime::MIN).earliest().unwrap_or(now);
    let end = now
        .with_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
        .latest()
        .unwrap_or(now);

    (start, end)
}

fn map_profile(row: PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        user_id: row.get("user_id"),
        display_name: row.get("display_name"),
        age: row.get("age"),
        gender: row.get("gender"),
        bio: row.get("bio"),
        created_at: row.get("created_at"),
        modified_at: row.get("modified_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn day_bounds_cover_the_whole_local_day() {
        let now = Local.with_ymd_and_hms(2025, 6, 14, 15, 30, 45).unwrap();

        let (start, end) = day_bounds(now);

        assert_eq!(start.date_naive(), now.date_naive());
        assert_eq!(end.date_naive(), now.date_naive());
        assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert!(start <= now && now <= end);
    }

    #[test]
    fn day_bounds_at_midnight_start_at_midnight() {
        let now = Local.with_ymd_and_hms(2025, 6, 14, 0, 0, 0).unwrap();

        let (start, end) = day_bounds(now);

        assert_eq!(start, now);
        assert_eq!(end.day(), now.day());
    }

    #[test]
    fn fresh_user_has_the_full_quota() {
        assert_eq!(remaining_quota(0), PROFILE_STACK_COUNT);
    }

    #[test]
    fn quota_shrinks_by_swipe_count() {
        assert_eq!(remaining_quota(7), PROFILE_STACK_COUNT - 7);
    }

    #[test]
    fn quota_is_spent_at_the_cap() {
        assert_eq!(remaining_quota(PROFILE_STACK_COUNT), 0);
    }

    #[test]
    fn quota_past_the_cap_stays_non_positive() {
        assert!(remaining_quota(PROFILE_STACK_COUNT + 3) < 0);
    }
}
