use crate::core::error::ConfigurationError;

/// Process-level configuration, read once at startup from `CAS_*`
/// environment variables (via `dotenvy` + `std::env`). Unparseable values
/// are a `ConfigurationError` — a setup bug to fail fast on at startup,
/// never a caller-facing failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Hard TTL, in seconds, for a `longTerm` ("remember me") session.
    pub tgt_ttl_seconds: u64,
    /// Idle (sliding) timeout, in seconds, for a normal session.
    pub tgt_sliding_ttl_seconds: u64,
    /// TTL, in seconds, for a granted access (service/proxy ticket).
    pub st_ttl_seconds: u64,
}

impl Config {
    const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:8080";
    const DEFAULT_TGT_TTL_SECONDS: u64 = 60 * 60 * 24 * 14; // two weeks, long-term
    const DEFAULT_TGT_SLIDING_TTL_SECONDS: u64 = 60 * 30; // 30 minutes idle
    const DEFAULT_ST_TTL_SECONDS: u64 = 10; // conventional CAS service-ticket lifetime

    /// Load configuration from the process environment, applying
    /// `.env`-file overrides first via `dotenvy` (a no-op if no `.env`
    /// file is present).
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            bind_addr: env_or_default("CAS_BIND_ADDR", Self::DEFAULT_BIND_ADDR),
            tgt_ttl_seconds: env_parsed_or_default("CAS_TGT_TTL_SECONDS", Self::DEFAULT_TGT_TTL_SECONDS)?,
            tgt_sliding_ttl_seconds: env_parsed_or_default("CAS_TGT_SLIDING_TTL_SECONDS", Self::DEFAULT_TGT_SLIDING_TTL_SECONDS)?,
            st_ttl_seconds: env_parsed_or_default("CAS_ST_TTL_SECONDS", Self::DEFAULT_ST_TTL_SECONDS)?,
        })
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed_or_default(key: &str, default: u64) -> Result<u64, ConfigurationError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigurationError::new(format!("{} must be a non-negative integer, got '{}'", key, raw))),
    }
}
