//! Controllers for registration and login

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use validator::Validate;

use crate::models::{NewUser, User};
use crate::schemas::auth::{
	AuthResponse,
	CheckUserQuery,
	ExistsResponse,
	LoginRequest,
	RegisterRequest,
};
use crate::token::Claims;
use crate::{Config, DbPool, Error};

#[instrument(skip_all)]
pub(crate) async fn register(
	State(pool): State<DbPool>,
	State(config): State<Config>,
	Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	if User::username_exists(request.username.clone(), &conn).await? {
		return Err(Error::DuplicateEntityError(
			"'username' is already in use".to_string(),
		));
	}

	if User::email_exists(request.email.clone(), &conn).await? {
		return Err(Error::DuplicateEntityError(
			"'email' is already in use".to_string(),
		));
	}

	let salt = SaltString::generate(&mut OsRng);
	let password_hash = Argon2::default()
		.hash_password(request.password.as_bytes(), &salt)?
		.to_string();

	let new_user = NewUser {
		full_name: request.full_name,
		email: request.email,
		username: request.username,
		password_hash,
		role: request.role.unwrap_or_default(),
		job_title: request.job_title,
		contact_number: request.contact_number,
	};

	let user = new_user.insert(&conn).await?;

	info!(
		"registered new account id: {} username: {} email: {}",
		user.id, user.username, user.email
	);

	let token = Claims::new(&user, &config).sign(&config)?;

	Ok((StatusCode::CREATED, Json(AuthResponse::from((user, token)))))
}

#[instrument(skip_all)]
pub(crate) async fn login(
	State(pool): State<DbPool>,
	State(config): State<Config>,
	Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	// Resolve by username first, fall back to email
	let user = match User::get_by_username(request.username.clone(), &conn)
		.await?
	{
		Some(user) => Some(user),
		None => User::get_by_email(request.username, &conn).await?,
	};

	let Some(user) = user else {
		return Err(Error::InvalidCredentials);
	};

	let parsed_hash = PasswordHash::new(&user.password_hash)?;
	Argon2::default()
		.verify_password(request.password.as_bytes(), &parsed_hash)?;

	info!("logged in account {}", user.id);

	let token = Claims::new(&user, &config).sign(&config)?;

	Ok((StatusCode::OK, Json(AuthResponse::from((user, token)))))
}

#[instrument(skip(pool))]
pub(crate) async fn check_user(
	State(pool): State<DbPool>,
	Query(query): Query<CheckUserQuery>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	// Email is checked first
	let mut exists = false;

	if let Some(email) = query.email {
		exists = User::email_exists(email, &conn).await?;
	}

	if !exists {
		if let Some(username) = query.username {
			exists = User::username_exists(username, &conn).await?;
		}
	}

	Ok((StatusCode::OK, Json(ExistsResponse { exists })))
}
