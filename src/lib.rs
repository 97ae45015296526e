pub mod attendance;
pub mod auth;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates_structs;
