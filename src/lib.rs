pub mod config;
pub mod error;
pub mod recipes;
pub mod server;
pub mod session;

pub use error::RecipeError;
pub use recipes::{Recipe, RecipeStore};
pub use session::{PasswordGate, SessionState};
