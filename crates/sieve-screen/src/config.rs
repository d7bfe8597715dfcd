//! Screen configuration.

use serde::{Deserialize, Serialize};
use sieve_traits::{Result, SieveError};

/// Configuration for a screening run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Maximum number of fundamentals fetches in flight (default: 8)
    pub batch_size: usize,
    /// Per-request timeout handed to network providers, in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            batch_size: 8,
            request_timeout_secs: 30,
        }
    }
}

impl ScreenConfig {
    /// Check the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidConfig`] if `batch_size` or
    /// `request_timeout_secs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SieveError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(SieveError::InvalidConfig(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreenConfig::default();
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = ScreenConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SieveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ScreenConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: ScreenConfig =
            serde_json::from_str(r#"{"batch_size": 4, "request_timeout_secs": 10}"#).unwrap();
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.validate().is_ok());
    }
}
