use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use thiserror::Error as ThisError;
use tracing::error;

use crate::session::state::{Notice, NoticeLevel};

#[derive(Debug, ThisError)]
pub enum RecipeError {
    #[error("Incorrect password.")]
    Authentication,

    #[error("Please log in first.")]
    LoginRequired,

    #[error("Required fields are missing: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("A recipe named '{0}' already exists.")]
    DuplicateName(String),

    #[error("No recipe named '{0}' exists.")]
    NotFound(String),

    #[error("Session actor error: {0}")]
    Actor(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RecipeError {
    /// Errors raised by a user action; shown inline instead of failing the request.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            RecipeError::Authentication
                | RecipeError::LoginRequired
                | RecipeError::Validation(_)
                | RecipeError::DuplicateName(_)
                | RecipeError::NotFound(_)
        )
    }

    pub fn to_notice(&self) -> Notice {
        let level = match self {
            RecipeError::Validation(_) => NoticeLevel::Warning,
            RecipeError::LoginRequired => NoticeLevel::Info,
            _ => NoticeLevel::Error,
        };
        Notice::new(level, self.to_string())
    }
}

/// Only infrastructure failures reach here; handlers turn user-facing errors into notices.
impl IntoResponse for RecipeError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>500</h1><p>An internal server error occurred.</p>"),
        )
            .into_response()
    }
}
