//! Social Router
//!
//! Route groups by auth requirement: public (tags), optional auth
//! (reads with viewer-dependent flags), required auth (mutations).

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::presentation::middleware::{optional_auth, require_auth};
use platform::token::TokenService;

use crate::infra::postgres::PgSocialRepository;
use crate::presentation::handlers::{self, SocialAppState, SocialRepository};

/// Create the social router with the PostgreSQL repository
pub fn social_router(repo: PgSocialRepository, tokens: Arc<TokenService>) -> Router {
    social_router_generic(repo, tokens)
}

/// Create a social router for any repository implementation
pub fn social_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: SocialRepository,
{
    let state = SocialAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new().route("/tags", get(handlers::list_tags::<R>));

    let optional = Router::new()
        .route("/profiles/{username}", get(handlers::get_profile::<R>))
        .route("/articles", get(handlers::list_articles::<R>))
        .route("/articles/{slug}", get(handlers::get_article::<R>))
        .route(
            "/articles/{slug}/comments",
            get(handlers::list_comments::<R>),
        )
        .route_layer(from_fn_with_state(tokens.clone(), optional_auth));

    let protected = Router::new()
        .route(
            "/profiles/{username}/follow",
            post(handlers::follow_profile::<R>).delete(handlers::unfollow_profile::<R>),
        )
        .route("/articles", post(handlers::create_article::<R>))
        .route(
            "/articles/{slug}",
            put(handlers::update_article::<R>).delete(handlers::delete_article::<R>),
        )
        .route(
            "/articles/{slug}/favorite",
            post(handlers::favorite_article::<R>).delete(handlers::unfavorite_article::<R>),
        )
        .route(
            "/articles/{slug}/comments",
            post(handlers::add_comment::<R>),
        )
        .route(
            "/articles/{slug}/comments/{id}",
            delete(handlers::delete_comment::<R>),
        )
        .route_layer(from_fn_with_state(tokens, require_auth));

    public.merge(optional).merge(protected).with_state(state)
}
