pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod migration;
pub mod schema;
pub mod seed;
pub mod telemetry;
