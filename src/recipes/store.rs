use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::model::Recipe;
use super::seed::seed_recipes;
use crate::error::RecipeError;

/// In-memory recipes for one session, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeStore {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the example recipes when the store holds nothing. Returns whether it did.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.recipes.is_empty() {
            return false;
        }
        for recipe in seed_recipes() {
            self.recipes.insert(recipe.name.clone(), recipe);
        }
        debug!(count = self.recipes.len(), "seeded recipe store");
        true
    }

    pub fn add(&mut self, recipe: Recipe) -> Result<(), RecipeError> {
        let missing = recipe.missing_fields();
        if !missing.is_empty() {
            return Err(RecipeError::Validation(missing));
        }
        if self.recipes.contains_key(&recipe.name) {
            return Err(RecipeError::DuplicateName(recipe.name));
        }
        self.recipes.insert(recipe.name.clone(), recipe);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Recipe, RecipeError> {
        self.recipes
            .remove(name)
            .ok_or_else(|| RecipeError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Union of every recipe's tags, sorted.
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.recipes
            .values()
            .flat_map(|recipe| recipe.tags.iter().cloned())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeStore {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter
                .into_iter()
                .map(|recipe| (recipe.name.clone(), recipe))
                .collect(),
        }
    }
}
