use std::sync::LazyLock;

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher};
use axum_test::TestServer;
use chrono::TimeDelta;
use deadpool_diesel::postgres::{Manager, Pool};
use diesel_migrations::{
	EmbeddedMigrations,
	MigrationHarness,
	embed_migrations,
};
use roomdesk::{AppState, Config, DbConn, DbPool, routes};
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/");

/// Password shared by all seeded accounts
#[allow(dead_code)]
pub const SEED_PASSWORD: &str = "bobdebouwer1234!";

/// Global test database provider
static TEST_DATABASE_FIXTURE: LazyLock<TestDatabaseFixture> =
	LazyLock::new(TestDatabaseFixture::new);

/// A RAII guard provider which generates temporary test databases
struct TestDatabaseFixture {
	base_url:  String,
	root_pool: DbPool,
}

/// A test database RAII guard
pub struct DatabaseGuard {
	root_conn:     DbConn,
	database_name: String,
	database_url:  String,
}

/// A test axum app against a oneshot database
#[allow(dead_code)]
pub struct TestEnv {
	pub app:      TestServer,
	pub pool:     DbPool,
	pub db_guard: DatabaseGuard,
}

impl TestEnv {
	/// Get a test environment with a seeded user and admin account
	///
	/// # Panics
	/// Panics if building the test server or seeding fails
	pub async fn new() -> Self {
		let test_pool_guard = (*TEST_DATABASE_FIXTURE).acquire().await;
		let test_pool = test_pool_guard.create_pool();

		let config = Config {
			database_url:          test_pool_guard.database_url.clone(),
			jwt_secret:            "test-jwt-secret".to_string(),
			access_token_lifetime: TimeDelta::minutes(60),
			server_port:           0,
		};

		let state =
			AppState { config, database_pool: test_pool.clone() };
		let app = routes::get_app_router(state);

		let test_server = TestServer::builder().build(app).unwrap();

		let salt = SaltString::generate(&mut OsRng);
		let password_hash = Argon2::default()
			.hash_password(SEED_PASSWORD.as_bytes(), &salt)
			.unwrap()
			.to_string();

		let conn = test_pool.get().await.unwrap();

		conn.interact(|conn| {
			use diesel::prelude::*;
			use diesel::sql_types::Text;

			diesel::sql_query(
				"INSERT INTO account (full_name, email, username, \
				 password_hash, role) VALUES ('Bob de Bouwer', \
				 'bob@example.com', 'bob', $1, 'user'), ('Alice Admin', \
				 'alice@example.com', 'alice', $2, 'admin');",
			)
			.bind::<Text, _>(password_hash.clone())
			.bind::<Text, _>(password_hash)
			.execute(conn)
		})
		.await
		.unwrap()
		.unwrap();

		TestEnv { app: test_server, pool: test_pool, db_guard: test_pool_guard }
	}

	/// Log a seeded account in through the API, returning its bearer token
	///
	/// # Panics
	/// Panics if the login fails
	#[allow(dead_code)]
	pub async fn login(&self, username: &str) -> String {
		let response = self
			.app
			.post("/api/auth/login")
			.json(&serde_json::json!({
				"username": username,
				"password": SEED_PASSWORD,
			}))
			.await;

		assert_eq!(response.status_code(), 200);

		let body = response.json::<serde_json::Value>();

		body["token"].as_str().unwrap().to_string()
	}

	#[allow(dead_code)]
	pub async fn login_user(&self) -> String { self.login("bob").await }

	#[allow(dead_code)]
	pub async fn login_admin(&self) -> String { self.login("alice").await }
}

impl TestDatabaseFixture {
	fn new() -> Self {
		if Ok("true".to_string()) == std::env::var("CI") {
			tracing_subscriber::fmt()
				.pretty()
				.with_thread_names(true)
				.with_max_level(tracing::Level::DEBUG)
				.init();
		}

		let database_url = std::env::var("DATABASE_URL").unwrap();
		let (base_url, _) = database_url.rsplit_once('/').unwrap();
		let base_url = base_url.to_string();

		let manager = Manager::new(
			database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		let root_pool = Pool::builder(manager).build().unwrap();

		Self { base_url, root_pool }
	}

	/// Acquire a new [`DatabaseGuard`] for accessing a temporary test
	/// database
	///
	/// # Panics
	/// Panics if creating a database fails
	async fn acquire(&self) -> DatabaseGuard {
		let uuid = Uuid::new_v4().simple().to_string();
		let database_name = format!("test_{uuid}");
		let database_url = format!("{}/{}", self.base_url, database_name);

		let root_conn = self
			.root_pool
			.get()
			.await
			.expect("could not get root pool connection");

		let create_db_query = format!("CREATE DATABASE {database_name};");

		root_conn
			.interact(|conn| {
				use diesel::prelude::*;

				diesel::sql_query(create_db_query).execute(conn)
			})
			.await
			.expect("could not interact with root connection")
			.expect("could not create test database");

		DatabaseGuard { root_conn, database_name, database_url }
	}
}

impl DatabaseGuard {
	/// Create a new database pool for this test database guard
	///
	/// # Panics
	/// Panics if creation fails
	#[must_use]
	pub fn create_pool(&self) -> DbPool {
		let manager = Manager::new(
			self.database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		let pool = Pool::builder(manager).build().unwrap();

		futures::executor::block_on(async {
			let conn = pool.get().await.unwrap();
			conn.interact(|conn| {
				conn.run_pending_migrations(MIGRATIONS).map(|_| ())
			})
			.await
			.unwrap()
			.unwrap();
		});

		pool
	}
}

impl Drop for DatabaseGuard {
	fn drop(&mut self) {
		let drop_db_query =
			format!("DROP DATABASE {} WITH (FORCE);", self.database_name);

		futures::executor::block_on(async move {
			self.root_conn
				.interact(|conn| {
					use diesel::prelude::*;

					diesel::sql_query(drop_db_query).execute(conn)
				})
				.await
				.expect("could not interact with root connection")
				.expect("could not drop test database");
		});
	}
}
