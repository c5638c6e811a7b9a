//! User Account Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the account router with the PostgreSQL repository
pub fn user_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    user_router_generic(repo, tokens)
}

/// Create an account router for any repository implementation
pub fn user_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
    };

    let public = Router::new()
        .route("/users", post(handlers::register::<R>))
        .route("/users/login", post(handlers::login::<R>));

    let protected = Router::new()
        .route(
            "/user",
            get(handlers::current_user::<R>).put(handlers::update_user::<R>),
        )
        .route_layer(from_fn_with_state(tokens, require_auth));

    public.merge(protected).with_state(state)
}
