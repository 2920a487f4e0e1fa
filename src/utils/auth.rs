use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{self, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::Error;
use crate::core::state::AppState;

const ISSUER: &str = "https://api.kindred.app";

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct Claims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) sub: String,
    pub(crate) iss: String,
}

pub(crate) fn encode_jwt(user_id: Uuid, secret: &str, expiry_hours: i64) -> Result<String, Error> {
    let current_time = Utc::now();
    let expiration_time = current_time + Duration::hours(expiry_hours);

    let claims = Claims {
        exp: expiration_time.timestamp() as usize,
        iat: current_time.timestamp() as usize,
        sub: user_id.to_string(),
        iss: ISSUER.into(),
    };

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub(crate) fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    match jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    ) {
        Ok(token_data) => Ok(token_data),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(Error::ExpiredToken),
            _ => Err(Error::Jwt(e)),
        },
    }
}

pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(Error::NoCredentials)?;

    let mut header = auth_header.to_str()?.split_whitespace();

    let (_bearer, token) = (header.next(), header.next());

    let user = state
        .auth_controller
        .authenticate(token.unwrap_or_default())
        .await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trip_recovers_subject() {
        let user_id = Uuid::new_v4();

        let token = encode_jwt(user_id, SECRET, 24).unwrap();
        let data = decode_jwt(&token, SECRET).unwrap();

        assert_eq!(data.claims.sub, user_id.to_string());
        assert_eq!(data.claims.iss, ISSUER);
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = encode_jwt(Uuid::new_v4(), SECRET, -1).unwrap();

        match decode_jwt(&token, SECRET) {
            Err(Error::ExpiredToken) => (),
            other => panic!("expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_jwt(Uuid::new_v4(), SECRET, 24).unwrap();

        match decode_jwt(&token, "other-secret") {
            Err(Error::Jwt(_)) => (),
            other => panic!("expected signature error, got {:?}", other),
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_jwt("not-a-token", SECRET).is_err());
    }
}
