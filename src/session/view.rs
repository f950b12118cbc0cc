//! View models handed to the templates. Built from session state on every render.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::state::{Notice, SessionState};
use crate::recipes::{Recipe, RecipeFilter, resolve_selection};

/// Query string of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrowseQuery {
    pub q: String,
    pub tag: Vec<String>,
    pub selected: Option<String>,
    /// Recipe picked for deletion, awaiting confirmation.
    pub delete: Option<String>,
}

impl BrowseQuery {
    /// Tags no recipe carries any more are dropped, so every active tag has a checkbox.
    pub fn filter(&self, known_tags: &BTreeSet<String>) -> RecipeFilter {
        let tags = self
            .tag
            .iter()
            .filter(|tag| known_tags.contains(*tag))
            .map(String::as_str);
        RecipeFilter::new(self.q.as_str(), tags)
    }
}

#[derive(Debug, Clone)]
pub enum Page {
    Login(LoginView),
    Book(BookView),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginView {
    pub notice: Option<Notice>,
    pub default_password: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub notice: Option<Notice>,
    pub query: String,
    pub tag_options: Vec<Choice>,
    pub results: Vec<ResultLink>,
    pub result_count: usize,
    pub filters_active: bool,
    pub detail: Option<RecipeDetail>,
    pub delete_options: Vec<Choice>,
    pub pending_delete: Option<String>,
}

/// One option of a checkbox, radio or select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: String,
    pub checked: bool,
}

/// Entry of the result list; `href` keeps the current filter and picks this recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLink {
    pub name: String,
    pub checked: bool,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub number: usize,
    pub text: String,
}

impl BookView {
    pub fn build(state: &SessionState, query: &BrowseQuery, notice: Option<Notice>) -> Self {
        let store = state.store();
        let all_tags = store.all_tags();
        let filter = query.filter(&all_tags);
        let results = filter.apply(store);
        let selected = resolve_selection(&results, query.selected.as_deref());

        let tag_options = all_tags
            .into_iter()
            .map(|tag| Choice {
                checked: filter.tags().contains(&tag),
                name: tag,
            })
            .collect();

        let pending_delete = query
            .delete
            .as_deref()
            .filter(|name| store.contains(name))
            .map(str::to_string);

        let delete_options = store
            .names()
            .map(|name| Choice {
                name: name.to_string(),
                checked: pending_delete.as_deref() == Some(name),
            })
            .collect();

        Self {
            notice,
            query: query.q.clone(),
            tag_options,
            result_count: results.len(),
            results: results
                .iter()
                .map(|name| ResultLink {
                    name: name.to_string(),
                    checked: Some(*name) == selected,
                    href: selection_href(&query.q, filter.tags(), name),
                })
                .collect(),
            filters_active: !filter.is_empty(),
            detail: selected.and_then(|name| store.get(name)).map(RecipeDetail::from),
            delete_options,
            pending_delete,
        }
    }
}

fn selection_href(q: &str, tags: &BTreeSet<String>, name: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !q.is_empty() {
        query.append_pair("q", q);
    }
    for tag in tags {
        query.append_pair("tag", tag);
    }
    query.append_pair("selected", name);
    format!("/?{}", query.finish())
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: Some(recipe.description.clone()).filter(|d| !d.trim().is_empty()),
            tags: recipe.tags.iter().cloned().collect(),
            image_url: recipe.image_url.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe
                .instructions
                .iter()
                .enumerate()
                .map(|(i, text)| Step {
                    number: i + 1,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}
