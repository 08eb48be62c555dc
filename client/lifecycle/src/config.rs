//! Engine configuration, from defaults or from environment variables.

use crate::cache::DEFAULT_TTL_SECS;
use crate::clock::YearMode;
use crate::errors::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Time-to-live of the project→campaign index cache, in seconds.
    pub index_cache_ttl_secs: u64,
    /// Year convention applied to campaign schedules.
    pub year_mode: YearMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            index_cache_ttl_secs: DEFAULT_TTL_SECS,
            // Campaign records store their year as an offset from 2000.
            year_mode: YearMode::OffsetFrom2000,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        Ok(EngineConfig {
            index_cache_ttl_secs: env_var("INDEX_CACHE_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_TTL_SECS.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid INDEX_CACHE_TTL_SECS".to_string()))?,
            year_mode: match env_var("CAMPAIGN_YEAR_MODE")
                .unwrap_or_else(|_| "offset2000".to_string())
                .as_str()
            {
                "offset2000" => YearMode::OffsetFrom2000,
                "full" => YearMode::FullYear,
                other => {
                    return Err(EngineError::Config(format!(
                        "Invalid CAMPAIGN_YEAR_MODE: {other}"
                    )))
                }
            },
        })
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| EngineError::Config(format!("Missing env var: {key}")))
}
