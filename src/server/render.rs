//! HTML rendering with Handlebars.
//!
//! Templates are compiled into the binary. Handlebars escapes every `{{value}}`,
//! so recipe text typed into the add form is rendered inert.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::RecipeError;
use crate::session::view::{BookView, LoginView, Page};

const LAYOUT: &str = include_str!("../../templates/layout.hbs");
const LOGIN: &str = include_str!("../../templates/login.hbs");
const BOOK: &str = include_str!("../../templates/book.hbs");
const NOTICE: &str = include_str!("../../templates/notice.hbs");

/// Compiled page templates.
pub struct Templates {
    handlebars: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, RecipeError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        handlebars.register_partial("layout", LAYOUT)?;
        handlebars.register_partial("notice", NOTICE)?;
        handlebars.register_template_string("login", LOGIN)?;
        handlebars.register_template_string("book", BOOK)?;

        Ok(Self { handlebars })
    }

    pub fn render_page(&self, page: &Page) -> Result<String, RecipeError> {
        match page {
            Page::Login(view) => self.render_login(view),
            Page::Book(view) => self.render_book(view),
        }
    }

    pub fn render_login(&self, view: &LoginView) -> Result<String, RecipeError> {
        self.render("login", view)
    }

    pub fn render_book(&self, view: &BookView) -> Result<String, RecipeError> {
        self.render("book", view)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RecipeError> {
        Ok(self.handlebars.render(name, data)?)
    }
}
