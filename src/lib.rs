pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod espn;
pub mod fixtures;
pub mod formatting;
pub mod model;
pub mod table;
pub mod transform;

#[cfg(any(test, feature = "development"))]
pub mod dev;
