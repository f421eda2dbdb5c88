use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("AANBOD_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("AANBOD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AANBOD_USER_AGENT", "aanbod/0.1 (offer-catalog)");
    let max_retries = parse_u32("AANBOD_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("AANBOD_RETRY_BACKOFF_BASE_SECS", "5")?;

    let dirk_window_days = parse_u32("AANBOD_DIRK_WINDOW_DAYS", "7")?;
    if dirk_window_days == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AANBOD_DIRK_WINDOW_DAYS".to_string(),
            reason: "offer window must span at least one day".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        dirk_window_days,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "aanbod/0.1 (offer-catalog)");
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_backoff_base_secs, 5);
        assert_eq!(cfg.dirk_window_days, 7);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("AANBOD_LOG_LEVEL", "debug");
        map.insert("AANBOD_REQUEST_TIMEOUT_SECS", "60");
        map.insert("AANBOD_USER_AGENT", "custom-agent/2.0");
        map.insert("AANBOD_MAX_RETRIES", "0");
        map.insert("AANBOD_DIRK_WINDOW_DAYS", "6");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
        assert_eq!(cfg.max_retries, 0);
        assert_eq!(cfg.dirk_window_days, 6);
    }

    #[test]
    fn build_app_config_fails_with_non_numeric_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("AANBOD_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AANBOD_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(AANBOD_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_non_numeric_retries() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("AANBOD_MAX_RETRIES", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AANBOD_MAX_RETRIES"),
            "expected InvalidEnvVar(AANBOD_MAX_RETRIES), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_day_window() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("AANBOD_DIRK_WINDOW_DAYS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AANBOD_DIRK_WINDOW_DAYS"),
            "expected InvalidEnvVar(AANBOD_DIRK_WINDOW_DAYS), got: {result:?}"
        );
    }
}
