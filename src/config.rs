use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;

/// Password used when `basic.app_password` is not configured.
pub const FALLBACK_PASSWORD: &str = "1234";

pub const CONFIG_FILE: &str = "config.toml";

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: failed to load configuration"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub loglevel: String,
    /// Shared secret for the login gate.
    pub app_password: Option<String>,
    /// Key material for the private session cookie; at least 64 bytes.
    pub cookie_secret: Option<String>,
    /// Mark the session cookie `Secure`. Enable when served over HTTPS.
    pub secure_cookie: bool,
    pub session_ttl_secs: u64,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            app_password: None,
            cookie_secret: None,
            secure_cookie: false,
            session_ttl_secs: 3600,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `RECIPE_*` env vars, then `APP_PASSWORD`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("RECIPE_").split("__"))
            .merge(
                Env::raw()
                    .only(&["APP_PASSWORD"])
                    .map(|_| "basic.app_password".into()),
            )
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.basic.session_ttl_secs.max(1))
    }
}
