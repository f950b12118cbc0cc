use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tracing::warn;

use super::handlers::{
    add_recipe_handler, delete_recipe_handler, health_handler, index_handler, login_handler,
    logout_handler,
};
use super::render::Templates;
use crate::config::BasicConfig;
use crate::error::RecipeError;
use crate::session::SessionsHandle;

/// Shared application state.
#[derive(Clone)]
pub struct RecipeState {
    pub sessions: SessionsHandle,
    pub templates: Arc<Templates>,
    pub cookie_key: Key,
    pub secure_cookie: bool,
    pub session_ttl: Duration,
}

impl RecipeState {
    pub fn new(
        sessions: SessionsHandle,
        cookie_key: Key,
        secure_cookie: bool,
        session_ttl: Duration,
    ) -> Result<Self, RecipeError> {
        Ok(Self {
            sessions,
            templates: Arc::new(Templates::new()?),
            cookie_key,
            secure_cookie,
            session_ttl,
        })
    }
}

/// Cookie key from `cookie_secret`, or a per-process random key when unset.
pub fn cookie_key(cfg: &BasicConfig) -> Result<Key, RecipeError> {
    match cfg.cookie_secret.as_deref() {
        Some(secret) => Key::try_from(secret.as_bytes()).map_err(|_| {
            RecipeError::Config("cookie_secret must be at least 64 bytes".to_string())
        }),
        None => {
            warn!("cookie_secret is not configured; using a random cookie key for this process");
            Ok(Key::generate())
        }
    }
}

pub fn recipe_router(state: RecipeState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/recipes", post(add_recipe_handler))
        .route("/recipes/delete", post(delete_recipe_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}
