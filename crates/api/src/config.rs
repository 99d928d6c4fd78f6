use std::time::Duration;

use category_db::PoolConfig;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and handed to each layer; nothing reads the
/// environment afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection URL.
    pub database_url: String,
    /// Shared secret every request must present in `X-API-Key`.
    pub auth_key: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Connection pool bounds.
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `DB_CONNECTION_STRING`    | falls back to `DATABASE_URL`, required |
    /// | `AUTH_KEY`                | required, non-empty        |
    /// | `HOST`                    | `127.0.0.1`                |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `DB_MAX_CONNECTIONS`      | `20`                       |
    /// | `DB_MIN_CONNECTIONS`      | `5`                        |
    /// | `DB_MAX_LIFETIME_SECS`    | `3600`                     |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`                      |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                       |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_CONNECTION_STRING")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DB_CONNECTION_STRING"))?;

        let auth_key = lookup("AUTH_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("AUTH_KEY"))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000, "u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
                "u32",
            )?,
            min_connections: parse_or(
                &lookup,
                "DB_MIN_CONNECTIONS",
                defaults.min_connections,
                "u32",
            )?,
            max_lifetime: Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
                "u64",
            )?),
            idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
                "u64",
            )?),
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
                "u64",
            )?),
        };

        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                expected: "value not above DB_MAX_CONNECTIONS",
                value: pool.min_connections.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            database_url,
            auth_key,
            cors_origins,
            pool,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value: raw,
        }),
    }
}
