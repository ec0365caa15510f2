mod database;
mod myconfig;
mod store;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::Config;
pub use self::store::{
    STORE_URL_VAR, StoreAccess, StoreCredentials, create_admin_client, create_anon_client,
};
