use serde::Serialize;

use crate::error::RecipeError;
use crate::recipes::RecipeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One-shot message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }
}

/// Everything one browser session owns.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub password_correct: bool,
    store: RecipeStore,
    seeded: bool,
    notice: Option<Notice>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecipeStore {
        &mut self.store
    }

    /// Runs the seed check the first time only; later calls are no-ops even if the store was emptied.
    pub fn ensure_seeded(&mut self) {
        if !self.seeded {
            self.store.seed_if_empty();
            self.seeded = true;
        }
    }

    pub fn require_login(&self) -> Result<(), RecipeError> {
        if self.password_correct {
            Ok(())
        } else {
            Err(RecipeError::LoginRequired)
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
