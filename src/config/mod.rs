//! Configuration modules for the snapschool API.
//!
//! Each submodule owns one concern and loads its values from environment
//! variables in a `from_env` constructor. `.env` is read by dotenvy in
//! `main` before any of these run.
//!
//! # Modules
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: MongoDB connection string and database name
//! - [`jwt`]: token signing secret and expiry
//! - [`server`]: listen port
//! - [`stripe`]: payment processor credentials

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
pub mod stripe;
