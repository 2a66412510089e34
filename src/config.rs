//! # Module: Client Configuration
//!
//! ## Responsibility
//! Resolve and validate startup configuration: the identify endpoint URL,
//! request timeout, and mock mode. Precedence, lowest to highest: built-in
//! defaults → optional TOML file → environment variables → CLI flags.
//!
//! ## Guarantees
//! - Deterministic: the same inputs always produce the same `ClientConfig`
//! - Validated: semantic constraints are checked before a config is accepted,
//!   so misconfiguration surfaces before the terminal is put in raw mode
//!
//! ## NOT Responsible For
//! - Constructing the service client (that belongs to `service`)
//! - Anything after startup; there is no hot reload

use serde::Deserialize;
use std::time::Duration;

use crate::LensError;

/// Environment variable overriding the endpoint URL.
pub const ENV_ENDPOINT: &str = "LINGUALENS_ENDPOINT";

/// Environment variable overriding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "LINGUALENS_TIMEOUT_MS";

// ── Default value functions ──────────────────────────────────────────────

/// Default identify endpoint, matching the service's local dev address.
fn default_endpoint() -> String {
    "http://127.0.0.1:8000/identify".to_string()
}

/// Default request timeout: 30000ms.
fn default_timeout_ms() -> u64 {
    30_000
}

/// Resolved client configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Identify service endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Use the canned mock backend instead of HTTP.
    #[serde(default)]
    pub mock: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            mock: false,
        }
    }
}

impl ClientConfig {
    /// Parses a TOML document into a config, applying defaults for missing
    /// fields. The result is *not* yet validated.
    ///
    /// # Errors
    /// Returns [`LensError::Config`] if the document is not valid TOML or
    /// has mistyped fields.
    pub fn from_toml(doc: &str) -> Result<Self, LensError> {
        toml::from_str(doc).map_err(|e| LensError::Config(format!("invalid config file: {e}")))
    }

    /// Resolves configuration from all sources.
    ///
    /// `args` are the process arguments *without* the program name.
    /// Recognized flags: `--config <file>`, `--endpoint <url>`,
    /// `--timeout-ms <n>`, `--mock`. Unknown flags are rejected so typos
    /// fail fast.
    ///
    /// # Errors
    /// Returns [`LensError::Config`] on unreadable/invalid file, malformed
    /// values, unknown flags, or failed validation.
    pub fn resolve(args: &[String]) -> Result<Self, LensError> {
        // CLI is scanned first only to find --config; flag overrides are
        // applied after file and env so precedence holds.
        let mut config_path: Option<String> = None;
        let mut i = 0;
        while i < args.len() {
            if args[i] == "--config" {
                i += 1;
                config_path = Some(flag_value(args, i, "--config")?.to_string());
            }
            i += 1;
        }

        let mut cfg = match &config_path {
            Some(path) => {
                let doc = std::fs::read_to_string(path).map_err(|e| {
                    LensError::Config(format!("cannot read config file {path}: {e}"))
                })?;
                Self::from_toml(&doc)?
            }
            None => Self::default(),
        };

        cfg.apply_env(
            std::env::var(ENV_ENDPOINT).ok(),
            std::env::var(ENV_TIMEOUT_MS).ok(),
        )?;
        cfg.apply_flags(args)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies environment overrides. Split out from [`Self::resolve`] so
    /// tests can inject values without touching the process environment.
    pub fn apply_env(
        &mut self,
        endpoint: Option<String>,
        timeout_ms: Option<String>,
    ) -> Result<(), LensError> {
        if let Some(url) = endpoint {
            self.endpoint = url;
        }
        if let Some(raw) = timeout_ms {
            self.timeout_ms = raw.parse().map_err(|_| {
                LensError::Config(format!("{ENV_TIMEOUT_MS} must be an integer, got {raw:?}"))
            })?;
        }
        Ok(())
    }

    /// Applies CLI flag overrides.
    fn apply_flags(&mut self, args: &[String]) -> Result<(), LensError> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--endpoint" => {
                    i += 1;
                    self.endpoint = flag_value(args, i, "--endpoint")?.to_string();
                }
                "--timeout-ms" => {
                    i += 1;
                    let raw = flag_value(args, i, "--timeout-ms")?;
                    self.timeout_ms = raw.parse().map_err(|_| {
                        LensError::Config(format!("--timeout-ms must be an integer, got {raw:?}"))
                    })?;
                }
                "--mock" => self.mock = true,
                "--config" => i += 1, // value consumed in the first scan
                other => {
                    return Err(LensError::Config(format!("unknown flag: {other}")));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// Checks semantic constraints.
    ///
    /// # Errors
    /// Returns [`LensError::Config`] if the endpoint is empty or not an
    /// http(s) URL, or if the timeout is zero.
    pub fn validate(&self) -> Result<(), LensError> {
        if self.endpoint.trim().is_empty() {
            return Err(LensError::Config("endpoint must not be empty".to_string()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(LensError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(LensError::Config("timeout-ms must be positive".to_string()));
        }
        Ok(())
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Returns the value following a flag, or a config error naming the flag.
fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str, LensError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| LensError::Config(format!("{flag} requires a value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.endpoint, "http://127.0.0.1:8000/identify");
        assert_eq!(cfg.timeout_ms, 30_000);
        assert!(!cfg.mock);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_toml_full() {
        let cfg = ClientConfig::from_toml(
            "endpoint = \"https://lang.example.com/identify\"\ntimeout_ms = 5000\nmock = true\n",
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "https://lang.example.com/identify");
        assert_eq!(cfg.timeout_ms, 5000);
        assert!(cfg.mock);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let cfg = ClientConfig::from_toml("timeout_ms = 1000\n").unwrap();
        assert_eq!(cfg.endpoint, "http://127.0.0.1:8000/identify");
        assert_eq!(cfg.timeout_ms, 1000);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = ClientConfig::from_toml("timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_flag_overrides() {
        let mut cfg = ClientConfig::default();
        cfg.apply_flags(&argv(&[
            "--endpoint",
            "http://10.0.0.5:8000/identify",
            "--timeout-ms",
            "750",
            "--mock",
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://10.0.0.5:8000/identify");
        assert_eq!(cfg.timeout_ms, 750);
        assert!(cfg.mock);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut cfg = ClientConfig::default();
        let err = cfg.apply_flags(&argv(&["--endpont", "x"])).unwrap_err();
        assert!(err.to_string().contains("unknown flag"));
    }

    #[test]
    fn test_flag_missing_value() {
        let mut cfg = ClientConfig::default();
        let err = cfg.apply_flags(&argv(&["--endpoint"])).unwrap_err();
        assert!(err.to_string().contains("requires a value"));
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg = ClientConfig::default();
        cfg.apply_env(
            Some("https://env.example.com/identify".to_string()),
            Some("1234".to_string()),
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "https://env.example.com/identify");
        assert_eq!(cfg.timeout_ms, 1234);
    }

    #[test]
    fn test_env_bad_timeout() {
        let mut cfg = ClientConfig::default();
        let err = cfg
            .apply_env(None, Some("a while".to_string()))
            .unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let cfg = ClientConfig {
            endpoint: "  ".to_string(),
            ..ClientConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_non_http_endpoint() {
        let cfg = ClientConfig {
            endpoint: "ftp://example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let cfg = ClientConfig {
            timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let cfg = ClientConfig {
            timeout_ms: 2500,
            ..ClientConfig::default()
        };
        assert_eq!(cfg.timeout(), Duration::from_millis(2500));
    }
}
