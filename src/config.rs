//! Server settings from environment variables.
//!
//! HOST, PORT, ASSIGN_POLICY (move | duplicate), ROSTER_CSV, BOARD_IDLE_HOURS,
//! COOKIE_SECURE. Bad values fall back to the default with a warning.

use crate::models::AssignPolicy;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub assign_policy: AssignPolicy,
    /// Load the squad from this CSV instead of the built-in sample.
    pub roster_csv: Option<PathBuf>,
    /// Formation boards untouched for this long are dropped.
    pub board_idle_timeout: Duration,
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            assign_policy: AssignPolicy::Move,
            roster_csv: None,
            board_idle_timeout: Duration::from_secs(12 * 3600),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let hours = parse_or("BOARD_IDLE_HOURS", lookup("BOARD_IDLE_HOURS"), 12u64);
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            assign_policy: parse_or("ASSIGN_POLICY", lookup("ASSIGN_POLICY"), defaults.assign_policy),
            roster_csv: lookup("ROSTER_CSV")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            board_idle_timeout: Duration::from_secs(hours.max(1) * 3600),
            cookie_secure: parse_or("COOKIE_SECURE", lookup("COOKIE_SECURE"), defaults.cookie_secure),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let c = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("ASSIGN_POLICY", "Duplicate"),
            ("ROSTER_CSV", "data/squad.csv"),
            ("BOARD_IDLE_HOURS", "2"),
            ("COOKIE_SECURE", "true"),
        ]);
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 3000);
        assert_eq!(c.assign_policy, AssignPolicy::Duplicate);
        assert_eq!(c.roster_csv, Some(PathBuf::from("data/squad.csv")));
        assert_eq!(c.board_idle_timeout, Duration::from_secs(2 * 3600));
        assert!(c.cookie_secure);
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config_from(&[("PORT", "eighty"), ("ASSIGN_POLICY", "swap"), ("BOARD_IDLE_HOURS", "0")]);
        assert_eq!(c.port, 8080);
        assert_eq!(c.assign_policy, AssignPolicy::Move);
        assert_eq!(c.board_idle_timeout, Duration::from_secs(3600));
    }
}
