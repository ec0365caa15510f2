use crate::errors::ConfigError;
use crate::utils::PriceFormat;
use std::{str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub poll_interval: Duration,
    pub run_migrations: bool,
    pub db_max_conn: u32,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub otel_endpoint: Option<String>,
    pub price_format: PriceFormat,
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let db_max_conn = parse_or(&lookup, "DB_MAX_CONN", 5u32)?;

        let poll_secs = parse_or(&lookup, "POLL_INTERVAL_SECS", 10u64)?;
        if poll_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "POLL_INTERVAL_SECS".into(),
                value: "0".into(),
                reason: "must be greater than zero".into(),
            });
        }

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref().map(str::trim) {
            None | Some("") | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    var: "RUN_MIGRATIONS".into(),
                    value: other.into(),
                    reason: "must be 'true' or 'false'".into(),
                });
            }
        };

        let dev_mode = flag(&lookup, "DEV_MODE");
        let enable_file_log = flag(&lookup, "ENABLE_FILE_LOG");

        let otel_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let default_price = PriceFormat::default();
        let price_format = PriceFormat {
            symbol: lookup("PRICE_CURRENCY_SYMBOL").unwrap_or(default_price.symbol),
            decimals: parse_or(&lookup, "PRICE_DECIMALS", default_price.decimals)?,
        };

        Ok(Self {
            port,
            poll_interval: Duration::from_secs(poll_secs),
            run_migrations,
            db_max_conn,
            dev_mode,
            enable_file_log,
            otel_endpoint,
            price_format,
        })
    }
}

fn flag<F>(lookup: &F, var: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw.clone(),
                reason: err.to_string(),
            }),
    }
}
