use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, Result};
use crate::history::MAX_RECENT_CHECKS;

pub const DEFAULT_API_URL: &str = "https://float-web-backend.onrender.com/check-hsa-eligibility";
pub const DEFAULT_USER_EMAIL: &str = "shubhi@withfloat.io";

pub const ENV_API_URL: &str = "ELIGIBILITY_API_URL";
pub const ENV_USER_EMAIL: &str = "ELIGIBILITY_USER_EMAIL";
pub const ENV_HIT_CACHE: &str = "ELIGIBILITY_HIT_CACHE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub api_url: String,
    pub user_email: String,
    #[serde(default = "default_hit_cache")]
    pub hit_cache: bool,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_hit_cache() -> bool {
    true
}

fn default_history_limit() -> usize {
    MAX_RECENT_CHECKS
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_email: DEFAULT_USER_EMAIL.to_string(),
            hit_cache: default_hit_cache(),
            history_limit: default_history_limit(),
        }
    }
}

impl CheckerConfig {
    /// Defaults with `ELIGIBILITY_*` environment variables applied on top.
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var(ENV_API_URL).ok();
        let user_email = std::env::var(ENV_USER_EMAIL).ok();
        let hit_cache = std::env::var(ENV_HIT_CACHE).ok();

        Self::default().with_overrides(
            api_url.as_deref(),
            user_email.as_deref(),
            hit_cache.as_deref(),
        )
    }

    /// Empty values are treated as unset.
    pub fn with_overrides(
        mut self,
        api_url: Option<&str>,
        user_email: Option<&str>,
        hit_cache: Option<&str>,
    ) -> Result<Self> {
        if let Some(url) = non_empty(api_url) {
            self.api_url = url.to_string();
        }
        if let Some(email) = non_empty(user_email) {
            self.user_email = email.to_string();
        }
        if let Some(flag) = non_empty(hit_cache) {
            self.hit_cache = parse_flag(flag)?;
        }
        Ok(self)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(EligibilityError::Config(format!(
            "{} must be a boolean, got {:?}",
            ENV_HIT_CACHE, other
        ))),
    }
}
