use super::gate::{Password, PasswordGate};
use super::state::{Notice, SessionState};
use crate::error::RecipeError;
use crate::recipes::RecipeForm;

/// A user interaction that changes session state.
#[derive(Debug, Clone)]
pub enum Action {
    Login { password: Password },
    Logout,
    AddRecipe(RecipeForm),
    DeleteRecipe { name: String },
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Logout => "logout",
            Action::AddRecipe(_) => "add_recipe",
            Action::DeleteRecipe { .. } => "delete_recipe",
        }
    }
}

/// Apply one action. On error `state` is left exactly as it was.
pub fn reduce(
    state: &mut SessionState,
    gate: &PasswordGate,
    action: Action,
) -> Result<Notice, RecipeError> {
    match action {
        Action::Login { password } => {
            if !gate.authenticate(&password) {
                return Err(RecipeError::Authentication);
            }
            state.password_correct = true;
            state.ensure_seeded();
            Ok(Notice::success("Logged in."))
        }
        Action::Logout => {
            state.password_correct = false;
            Ok(Notice::success("Logged out."))
        }
        Action::AddRecipe(form) => {
            state.require_login()?;
            let recipe = form.into_recipe()?;
            let name = recipe.name.clone();
            state.store_mut().add(recipe)?;
            Ok(Notice::success(format!("Recipe '{name}' was added.")))
        }
        Action::DeleteRecipe { name } => {
            state.require_login()?;
            state.store_mut().remove(&name)?;
            Ok(Notice::success(format!("Recipe '{name}' was deleted.")))
        }
    }
}
