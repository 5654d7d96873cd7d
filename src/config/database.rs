//! Document store configuration.
//!
//! The store is a hosted MongoDB deployment reached through a connection
//! string. The client is built once at startup and shared for the life of
//! the process; it is never explicitly closed.
//!
//! # Environment Variables
//!
//! - `MONGODB_URI`: connection string (required)
//! - `MONGODB_DB`: database name (default: `snapschool`)
//!
//! # Panics
//!
//! [`DatabaseConfig::from_env`] panics if `MONGODB_URI` is not set. A
//! missing connection string is a deployment error, not a runtime one.

use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub uri: String,
    pub db_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            db_name: env::var("MONGODB_DB").unwrap_or_else(|_| "snapschool".to_string()),
        }
    }
}
