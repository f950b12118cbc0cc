use std::collections::BTreeSet;

use super::model::Recipe;
use super::store::RecipeStore;

/// Free-text query plus the tags a recipe must all carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    text: String,
    tags: BTreeSet<String>,
}

impl RecipeFilter {
    pub fn new<I, T>(text: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            text: text.into().to_lowercase(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Name or any ingredient contains the text, and every selected tag is present.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let text_ok = self.text.is_empty() || recipe.matches_text(&self.text);
        let tags_ok = self.tags.is_empty() || recipe.has_all_tags(&self.tags);
        text_ok && tags_ok
    }

    /// Matching recipe names, alphabetical.
    pub fn apply<'a>(&self, store: &'a RecipeStore) -> Vec<&'a str> {
        store
            .iter()
            .filter(|recipe| self.matches(recipe))
            .map(|recipe| recipe.name.as_str())
            .collect()
    }
}

/// The recipe shown in detail: `requested` if it is among `results`, otherwise the first result.
pub fn resolve_selection<'a>(results: &[&'a str], requested: Option<&str>) -> Option<&'a str> {
    requested
        .and_then(|wanted| results.iter().copied().find(|name| *name == wanted))
        .or_else(|| results.first().copied())
}
