use crate::core::{error, state::AppState};
use crate::routes::{auth, profiles, subscriptions, swipes, users};
use crate::utils;
use axum::error_handling::HandleErrorLayer;
use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

pub(crate) fn routes(state: AppState) -> Router {
    // /users/...
    let user_router = Router::new()
        .route("/{id}", get(users::get).delete(users::delete))
        .route("/{id}/password", put(users::update_password))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /profiles/...
    let profile_router = Router::new()
        .route("/", get(profiles::get_all).post(profiles::post))
        .route(
            "/{id}",
            get(profiles::get)
                .put(profiles::put)
                .delete(profiles::delete),
        )
        .route("/{id}/stack", get(profiles::stack))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /swipes/...
    let swipe_router = Router::new()
        .route("/", get(swipes::get).post(swipes::post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /subscriptions/...
    let subscription_router = Router::new()
        .route("/", get(subscriptions::get_all).post(subscriptions::post))
        .route(
            "/{id}",
            get(subscriptions::get)
                .put(subscriptions::put)
                .delete(subscriptions::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/sign-in", post(auth::sign_in))
        .nest("/users", user_router)
        .nest("/profiles", profile_router)
        .nest("/swipes", swipe_router)
        .nest("/subscriptions", subscription_router)
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(HandleErrorLayer::new(error::handle_middleware_errors))
                .buffer(128)
                .rate_limit(10, Duration::from_secs(1))
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any),
                ),
        )
}
