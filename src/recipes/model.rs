use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::RecipeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Step order.
    pub instructions: Vec<String>,
    pub image_url: Option<String>,
    pub tags: BTreeSet<String>,
}

impl Recipe {
    /// Fields required by the store that are blank on this record.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.ingredients.is_empty() {
            missing.push("ingredients");
        }
        if self.instructions.is_empty() {
            missing.push("instructions");
        }
        missing
    }

    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|item| item.to_lowercase().contains(needle))
    }

    pub fn has_all_tags(&self, required: &BTreeSet<String>) -> bool {
        required.is_subset(&self.tags)
    }
}

/// Raw contents of the "add recipe" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    pub name: String,
    pub description: String,
    /// One ingredient per line.
    pub ingredients: String,
    /// One step per line.
    pub instructions: String,
    /// Comma separated.
    pub tags: String,
    pub image_url: String,
}

impl RecipeForm {
    pub fn into_recipe(self) -> Result<Recipe, RecipeError> {
        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let recipe = Recipe {
            // Names are keys; a stray space would make a look-alike duplicate.
            name: self.name.trim().to_string(),
            description: self.description,
            ingredients: parse_lines(&self.ingredients),
            instructions: parse_lines(&self.instructions),
            image_url,
            tags: parse_tags(&self.tags),
        };

        let missing = recipe.missing_fields();
        if !missing.is_empty() {
            return Err(RecipeError::Validation(missing));
        }
        Ok(recipe)
    }
}

pub fn parse_tags(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
