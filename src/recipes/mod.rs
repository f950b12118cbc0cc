//! Recipe domain: records, the per-session store, seed data and filtering.
//!
//! Layout:
//! - `model.rs`: `Recipe` and the add-form parsing rules
//! - `store.rs`: name-keyed `RecipeStore`
//! - `seed.rs`: example recipes loaded into a fresh session
//! - `search.rs`: text/tag filter and the selection rule

pub mod model;
pub mod search;
pub mod seed;
pub mod store;

pub use model::{Recipe, RecipeForm};
pub use search::{RecipeFilter, resolve_selection};
pub use store::RecipeStore;
