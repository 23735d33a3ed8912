/*!
 * Allocator Configuration
 *
 * Layered configuration: built-in defaults, then an optional JSON file,
 * then environment overrides.
 */

use super::errors::{ConfigError, ConfigResult};
use super::limits::{DEFAULT_COMMON_SIZES, ENV_COMMON_SIZES, ENV_CONFIG_PATH, ENV_FREE_LIST_POLICY};
use super::types::Size;
use crate::memory::FreeListPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Allocator construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct AllocatorConfig {
    /// Size classes that get a dedicated free-list queue. Treated as a set.
    pub common_sizes: Vec<Size>,
    /// What happens to a free-list slot once its segment is freed again
    pub policy: FreeListPolicy,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            common_sizes: DEFAULT_COMMON_SIZES.to_vec(),
            policy: FreeListPolicy::default(),
        }
    }
}

impl AllocatorConfig {
    pub fn new(common_sizes: impl Into<Vec<Size>>) -> Self {
        Self {
            common_sizes: common_sizes.into(),
            policy: FreeListPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FreeListPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), ?config, "Loaded allocator config");
        Ok(config)
    }

    /// Resolve the effective config from the process environment
    ///
    /// `QUICKFIT_CONFIG` names a JSON file; `QUICKFIT_COMMON_SIZES` and
    /// `QUICKFIT_FREE_LIST_POLICY` override individual fields on top of it.
    pub fn from_env() -> ConfigResult<Self> {
        let base = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        base.with_overrides(
            std::env::var(ENV_COMMON_SIZES).ok().as_deref(),
            std::env::var(ENV_FREE_LIST_POLICY).ok().as_deref(),
        )
    }

    /// Apply raw override strings as they would appear in the environment
    pub fn with_overrides(
        mut self,
        common_sizes: Option<&str>,
        policy: Option<&str>,
    ) -> ConfigResult<Self> {
        if let Some(raw) = common_sizes {
            self.common_sizes = parse_size_list(raw).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_COMMON_SIZES,
                value: raw.to_string(),
            })?;
            debug!(common_sizes = ?self.common_sizes, "Common sizes overridden");
        }

        if let Some(raw) = policy {
            self.policy = FreeListPolicy::from_name(raw).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_FREE_LIST_POLICY,
                value: raw.to_string(),
            })?;
            debug!(policy = ?self.policy, "Free-list policy overridden");
        }

        Ok(self)
    }
}

fn parse_size_list(raw: &str) -> Option<Vec<Size>> {
    if raw.trim().is_empty() {
        return None;
    }
    raw.split(',')
        .map(|part| part.trim().parse::<Size>().ok())
        .collect()
}
