use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::{User, UserRole};

static USERNAME_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-_]*$").unwrap());

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	#[validate(length(
		min = 2,
		max = 64,
		message = "full name must be between 2 and 64 characters long",
		code = "full-name-length"
	))]
	pub full_name:      String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email:          String,
	#[validate(regex(
		path = *USERNAME_REGEX,
		message = "username must start with a letter and only contain letters, numbers, dashes, or underscores",
		code = "username-regex"
	))]
	#[validate(length(
		min = 2,
		max = 32,
		message = "username must be between 2 and 32 characters long",
		code = "username-length"
	))]
	pub username:       String,
	#[validate(length(
		min = 8,
		message = "password must be at least 8 characters long",
		code = "password-length"
	))]
	pub password:       String,
	#[serde(default)]
	pub role:           Option<UserRole>,
	pub job_title:      Option<String>,
	pub contact_number: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginRequest {
	/// Username, or email as a fallback
	pub username: String,
	pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CheckUserQuery {
	pub email:    Option<String>,
	pub username: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExistsResponse {
	pub exists: bool,
}

/// Signed credential plus profile, returned on register and login
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
	pub id:             i32,
	pub name:           String,
	pub email:          String,
	pub role:           UserRole,
	pub job_title:      Option<String>,
	pub contact_number: Option<String>,
	pub token:          String,
}

impl From<(User, String)> for AuthResponse {
	fn from((user, token): (User, String)) -> Self {
		Self {
			id: user.id,
			name: user.full_name,
			email: user.email,
			role: user.role,
			job_title: user.job_title,
			contact_number: user.contact_number,
			token,
		}
	}
}
