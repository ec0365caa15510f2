//! Factories for the two authenticated clients of the hosted store.
//!
//! The elevated client authenticates as the service role and is meant for
//! server-side handlers only. The anonymous client authenticates as the
//! public role and is limited by whatever row policies the store enforces.

use crate::config::database::{ConnectionManager, ConnectionPool};
use crate::errors::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::{fmt, str::FromStr};
use tracing::debug;

pub const STORE_URL_VAR: &str = "ORDERS_STORE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAccess {
    Elevated,
    Anonymous,
}

impl StoreAccess {
    pub fn key_var(self) -> &'static str {
        match self {
            StoreAccess::Elevated => "ORDERS_SERVICE_ROLE_KEY",
            StoreAccess::Anonymous => "ORDERS_ANON_KEY",
        }
    }

    pub fn role_var(self) -> &'static str {
        match self {
            StoreAccess::Elevated => "ORDERS_SERVICE_ROLE",
            StoreAccess::Anonymous => "ORDERS_ANON_ROLE",
        }
    }

    pub fn default_role(self) -> &'static str {
        match self {
            StoreAccess::Elevated => "service_role",
            StoreAccess::Anonymous => "anon",
        }
    }
}

#[derive(Clone)]
pub struct StoreCredentials {
    pub access: StoreAccess,
    pub url: String,
    pub role: String,
    key: String,
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("access", &self.access)
            .field("url", &self.url)
            .field("role", &self.role)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl StoreCredentials {
    pub fn from_env(access: StoreAccess) -> Result<Self, ConfigError> {
        Self::from_lookup(access, |var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(access: StoreAccess, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, STORE_URL_VAR)?;
        let key = required(&lookup, access.key_var())?;
        let role = lookup(access.role_var())
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| access.default_role().to_string());

        debug!(
            access = ?access,
            role = %role,
            "Store URL configured: YES, key configured: YES"
        );

        Ok(Self {
            access,
            url,
            role,
            key,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(&self.url)?
            .username(&self.role)
            .password(&self.key);

        Ok(options)
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingEnv(var.to_string())),
    }
}

/// Client with service credentials. Server-side use only.
pub fn create_admin_client(max_connections: u32) -> Result<ConnectionPool, ConfigError> {
    let credentials = StoreCredentials::from_env(StoreAccess::Elevated)?;
    ConnectionManager::lazy_pool(&credentials, max_connections)
}

/// Client with anonymous credentials.
pub fn create_anon_client(max_connections: u32) -> Result<ConnectionPool, ConfigError> {
    let credentials = StoreCredentials::from_env(StoreAccess::Anonymous)?;
    ConnectionManager::lazy_pool(&credentials, max_connections)
}
