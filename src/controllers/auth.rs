use uuid::Uuid;

use crate::controllers::user::UserController;
use crate::core::error::Error;
use crate::types::response;
use crate::types::user::User;
use crate::utils::auth::{decode_jwt, encode_jwt};

#[derive(Clone)]
pub(crate) struct AuthController {
    users: UserController,
    secret: String,
    token_expiry_hours: i64,
}

impl std::fmt::Debug for AuthController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthController")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .finish()
    }
}

impl AuthController {
    pub(crate) fn new(users: UserController, secret: String, token_expiry_hours: i64) -> Self {
        Self {
            users,
            secret,
            token_expiry_hours,
        }
    }

    pub(crate) async fn validate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, Error> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        // an unknown username and a failed verification both collapse to None
        if !bcrypt::verify(password, &user.password_hash)? {
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub(crate) fn sign_in(&self, user: &User) -> Result<response::SignIn, Error> {
        let access_token = encode_jwt(user.id, &self.secret, self.token_expiry_hours)?;

        Ok(response::SignIn {
            access_token,
            expires_in: format!("{}h", self.token_expiry_hours),
        })
    }

    pub(crate) async fn sign_up(&self, username: &str, password: &str) -> Result<User, Error> {
        if password.len() < 8 {
            return Err(Error::InvalidPassword(
                "Password must be at least 8 characters".to_owned(),
            ));
        }

        let password_hash = self.hash(password)?;

        self.users.create(username, &password_hash).await
    }

    pub(crate) async fn authenticate(&self, token: &str) -> Result<User, Error> {
        let token_data = decode_jwt(token, &self.secret)?;

        let user_id =
            Uuid::parse_str(&token_data.claims.sub).map_err(|_| Error::Unauthorized)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(Error::Unauthorized)
    }

    pub(crate) fn hash(&self, value: &str) -> Result<String, Error> {
        bcrypt::hash(value, 12).map_err(Error::Bcrypt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::postgres::PgPool;

    fn controller() -> AuthController {
        let pool = PgPool::connect_lazy("postgresql://localhost/kindred").unwrap();
        let users = UserController::new(pool).unwrap();

        AuthController::new(users, "test-secret".into(), 24)
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            password_hash: String::new(),
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn sign_in_issues_token_with_user_id_subject() {
        let controller = controller();
        let user = user();

        let session = controller.sign_in(&user).unwrap();

        let data = decode_jwt(&session.access_token, "test-secret").unwrap();
        assert_eq!(data.claims.sub, user.id.to_string());
        assert_eq!(session.expires_in, "24h");
    }

    #[tokio::test]
    async fn password_hash_is_one_way() {
        let controller = controller();

        let hash = controller.hash("correct").unwrap();

        assert_ne!(hash, "correct");
        assert!(bcrypt::verify("correct", &hash).unwrap());
        assert!(!bcrypt::verify("wrong", &hash).unwrap());
    }
}
