#[cfg(feature = "server")]
pub mod auth;
pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod integrations;
#[cfg(feature = "server")]
pub mod middleware;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{load_server_config, run};
