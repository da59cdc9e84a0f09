//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{CacheConfig, MAX_TTL};
use crate::planner::SearchConfig;

/// Address to listen on when `ROUTE_SERVER_ADDR` is unset.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Error from reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct SettingsError {
    var: &'static str,
    value: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address to bind the HTTP listener to.
    pub addr: SocketAddr,

    /// Optional JSON file of departures to load at start-up.
    pub seed_file: Option<PathBuf>,

    pub search: SearchConfig,

    pub cache: CacheConfig,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// - `ROUTE_SERVER_ADDR` (default `127.0.0.1:3000`)
    /// - `ROUTE_SEED_FILE`
    /// - `ROUTE_MAX_EXPANSIONS`
    /// - `ROUTE_SEARCH_TIMEOUT_MS`
    /// - `ROUTE_CACHE_TTL_SECS`
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which returns the value of a variable
    /// if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = SearchConfig::default();
        let cache_defaults = CacheConfig::default();

        let addr = parse_var(&lookup, "ROUTE_SERVER_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_ADDR));

        let seed_file = lookup("ROUTE_SEED_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let search = SearchConfig::new(
            parse_var(&lookup, "ROUTE_MAX_EXPANSIONS")?.unwrap_or(defaults.max_expansions),
            parse_var(&lookup, "ROUTE_SEARCH_TIMEOUT_MS")?.unwrap_or(defaults.timeout_ms),
        );

        let cache = CacheConfig {
            ttl: parse_bounded(&lookup, "ROUTE_CACHE_TTL_SECS", MAX_TTL.as_secs())?
                .map(Duration::from_secs)
                .unwrap_or(cache_defaults.ttl),
            ..cache_defaults
        };

        Ok(Self {
            addr,
            seed_file,
            search,
            cache,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, SettingsError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError { var, value }),
    }
}

fn parse_bounded(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    max: u64,
) -> Result<Option<u64>, SettingsError> {
    match parse_var::<u64>(lookup, var)? {
        Some(n) if n > max => Err(SettingsError {
            var,
            value: lookup(var).unwrap_or_default(),
        }),
        parsed => Ok(parsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();

        assert_eq!(s.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(s.seed_file.is_none());
        assert_eq!(s.search.max_expansions, 10_000);
        assert_eq!(s.search.timeout_ms, 30_000);
        assert_eq!(s.cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("ROUTE_SERVER_ADDR", "0.0.0.0:8080"),
            ("ROUTE_SEED_FILE", "data/departures.json"),
            ("ROUTE_MAX_EXPANSIONS", "500"),
            ("ROUTE_SEARCH_TIMEOUT_MS", "1500"),
            ("ROUTE_CACHE_TTL_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(s.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(s.seed_file, Some(PathBuf::from("data/departures.json")));
        assert_eq!(s.search.max_expansions, 500);
        assert_eq!(s.search.timeout_ms, 1500);
        assert_eq!(s.cache.ttl, Duration::from_secs(5));
    }

    #[test]
    fn empty_seed_file_is_none() {
        let s = settings(&[("ROUTE_SEED_FILE", "")]).unwrap();
        assert!(s.seed_file.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = settings(&[("ROUTE_MAX_EXPANSIONS", "lots")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for ROUTE_MAX_EXPANSIONS: \"lots\""
        );

        assert!(settings(&[("ROUTE_SERVER_ADDR", "localhost")]).is_err());
        assert!(settings(&[("ROUTE_SEARCH_TIMEOUT_MS", "-1")]).is_err());
        assert!(settings(&[("ROUTE_CACHE_TTL_SECS", "18446744073709551615")]).is_err());
    }

    #[test]
    fn rejects_cache_ttl_too_long_for_cache() {
        let max = MAX_TTL.as_secs().to_string();
        let s = settings(&[("ROUTE_CACHE_TTL_SECS", max.as_str())]).unwrap();
        assert_eq!(s.cache.ttl, MAX_TTL);

        let over = (MAX_TTL.as_secs() + 1).to_string();
        assert!(settings(&[("ROUTE_CACHE_TTL_SECS", over.as_str())]).is_err());

        let huge = u64::MAX.to_string();
        let err = settings(&[("ROUTE_CACHE_TTL_SECS", huge.as_str())]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid value for ROUTE_CACHE_TTL_SECS: \"{huge}\"")
        );
    }
}
