use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT_REPLENISH_SECS: u64 = 2;
const DEFAULT_RATE_LIMIT_BURST: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Seconds between replenished registration requests per client IP
    pub rate_limit_replenish_secs: u64,
    /// Registration requests a client IP may make back to back
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT),
            rate_limit_replenish_secs: parse_or(
                "RATE_LIMIT_REPLENISH_SECS",
                env::var("RATE_LIMIT_REPLENISH_SECS").ok(),
                DEFAULT_RATE_LIMIT_REPLENISH_SECS,
            ),
            rate_limit_burst: parse_or(
                "RATE_LIMIT_BURST",
                env::var("RATE_LIMIT_BURST").ok(),
                DEFAULT_RATE_LIMIT_BURST,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rate_limit_replenish_secs: DEFAULT_RATE_LIMIT_REPLENISH_SECS,
            rate_limit_burst: DEFAULT_RATE_LIMIT_BURST,
        }
    }
}

/// Parse an optional setting, falling back to `default` when it is unset,
/// unparseable or zero
fn parse_or<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default + Copy + std::fmt::Display,
{
    let Some(raw) = value else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(parsed) if parsed != T::default() => parsed,
        _ => {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }
    }
}
