use axum::{
    Form, Json,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Query;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::form_urlencoded;

use super::middleware::session::CurrentSession;
use super::router::RecipeState;
use crate::error::RecipeError;
use crate::recipes::RecipeForm;
use crate::session::view::BrowseQuery;
use crate::session::{Action, Password};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: Password,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub name: String,
}

/// GET / -> login page, or the recipe book once logged in.
pub async fn index_handler(
    State(state): State<RecipeState>,
    session: CurrentSession,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, RecipeError> {
    let page = state.sessions.render(session.id, query).await?;
    let html = state.templates.render_page(&page)?;
    Ok((session.into_jar(), Html(html)).into_response())
}

/// POST /login
pub async fn login_handler(
    State(state): State<RecipeState>,
    session: CurrentSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, RecipeError> {
    let action = Action::Login {
        password: form.password,
    };
    apply(&state, session, action, "/".to_string()).await
}

/// POST /logout
pub async fn logout_handler(
    State(state): State<RecipeState>,
    session: CurrentSession,
) -> Result<Response, RecipeError> {
    apply(&state, session, Action::Logout, "/".to_string()).await
}

/// POST /recipes -> adds a recipe and selects it.
pub async fn add_recipe_handler(
    State(state): State<RecipeState>,
    session: CurrentSession,
    Form(form): Form<RecipeForm>,
) -> Result<Response, RecipeError> {
    let target = selected_location(form.name.trim());
    apply(&state, session, Action::AddRecipe(form), target).await
}

/// POST /recipes/delete -> second step of select-then-confirm.
pub async fn delete_recipe_handler(
    State(state): State<RecipeState>,
    session: CurrentSession,
    Form(form): Form<DeleteForm>,
) -> Result<Response, RecipeError> {
    let action = Action::DeleteRecipe { name: form.name };
    apply(&state, session, action, "/".to_string()).await
}

/// GET /healthz
pub async fn health_handler(
    State(state): State<RecipeState>,
) -> Result<Json<serde_json::Value>, RecipeError> {
    let sessions = state.sessions.active_sessions().await?;
    Ok(Json(json!({ "status": "ok", "sessions": sessions })))
}

/// Run the action, then redirect. User-facing failures were already stored as a notice.
async fn apply(
    state: &RecipeState,
    session: CurrentSession,
    action: Action,
    on_success: String,
) -> Result<Response, RecipeError> {
    let location = match state.sessions.dispatch(session.id, action).await {
        Ok(_) => on_success,
        Err(e) if e.is_user_facing() => {
            debug!(session = %session.id, error = %e, "action failed; redirecting with notice");
            "/".to_string()
        }
        Err(e) => return Err(e),
    };
    Ok((session.into_jar(), Redirect::to(&location)).into_response())
}

fn selected_location(name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("selected", name)
        .finish();
    format!("/?{query}")
}
