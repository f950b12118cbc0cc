use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::config::{BasicConfig, FALLBACK_PASSWORD};

/// Submitted password. `Debug` never prints the value.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Single shared secret guarding the recipe book.
#[derive(Clone)]
pub struct PasswordGate {
    secret: Arc<str>,
    fallback: bool,
}

impl PasswordGate {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
            fallback: false,
        }
    }

    /// Uses `app_password`, or the fallback literal with a warning when it is unset.
    pub fn from_config(cfg: &BasicConfig) -> Self {
        match cfg.app_password.as_deref() {
            Some(secret) => Self::new(secret),
            None => {
                warn!(
                    "app_password is not configured; falling back to the default password. Set APP_PASSWORD before deploying"
                );
                Self {
                    secret: Arc::from(FALLBACK_PASSWORD),
                    fallback: true,
                }
            }
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn authenticate(&self, submitted: &Password) -> bool {
        bool::from(submitted.expose().as_bytes().ct_eq(self.secret.as_bytes()))
    }

    /// True when running on the built-in default password.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl fmt::Debug for PasswordGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGate")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
