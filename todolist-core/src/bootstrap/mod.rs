//! Bootstrap module for initializing the todolist server
//!
//! This module handles:
//! - Configuration loading
//! - Database initialization (connect with retry, create database, schema)

pub mod config;
pub mod database;

pub use config::load_config;
pub use database::{ensure_schema, init_database};
