pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod localization;
pub mod metrics;
pub mod middleware;
pub mod repository;
pub mod services;
pub mod state;
