//! Per-session context: login gate, recipe store, and the actor that owns them.

pub mod action;
pub mod actor;
pub mod gate;
pub mod state;
pub mod view;

use std::fmt;
use uuid::Uuid;

pub use action::{Action, reduce};
pub use actor::SessionsHandle;
pub use gate::{Password, PasswordGate};
pub use state::{Notice, NoticeLevel, SessionState};

/// Random identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
