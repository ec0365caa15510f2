use crate::config::store::StoreCredentials;
use crate::errors::ConfigError;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds a pool that opens connections on first use, so constructing a
    /// client never blocks on the network.
    pub fn lazy_pool(
        credentials: &StoreCredentials,
        max_connections: u32,
    ) -> Result<ConnectionPool, ConfigError> {
        let options = credentials.connect_options()?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy_with(options);

        Ok(pool)
    }
}
