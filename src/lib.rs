//! # Roomdesk backend library

#[macro_use]
extern crate tracing;

use std::ops::Deref;

use axum::extract::FromRef;
use deadpool_diesel::postgres::{Object, Pool};

mod config;

pub mod controllers;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod schema;
pub mod schemas;
pub mod token;

pub use config::Config;
pub use error::Error;

pub type DbPool = Pool;
pub type DbConn = Object;

/// Id of the authenticated account, stamped onto the request by the
/// [`AuthLayer`](middleware::AuthLayer)
#[derive(Clone, Copy, Debug)]
pub struct UserId(pub(crate) i32);

impl Deref for UserId {
	type Target = i32;

	fn deref(&self) -> &Self::Target { &self.0 }
}

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config:        Config,
	pub database_pool: DbPool,
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for DbPool {
	fn from_ref(input: &AppState) -> Self { input.database_pool.clone() }
}
