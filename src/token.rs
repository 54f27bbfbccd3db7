//! Bearer tokens carrying the authenticated account id and role claim

use chrono::Utc;
use jsonwebtoken::{
	DecodingKey,
	EncodingKey,
	Header,
	Validation,
	decode,
	encode,
};
use serde::{Deserialize, Serialize};

use crate::Config;
use crate::error::{Error, InternalServerError};
use crate::models::{User, UserRole};

/// Claims payload embedded in every access token
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Claims {
	/// Subject, the account id
	pub sub:  i32,
	/// Account role at the time of issuance
	pub role: UserRole,
	/// Issued-at timestamp (seconds since epoch)
	pub iat:  i64,
	/// Expiration timestamp (seconds since epoch)
	pub exp:  i64,
}

impl Claims {
	/// Create a new set of [`Claims`] for an account
	#[must_use]
	pub fn new(user: &User, config: &Config) -> Self {
		let iat = Utc::now().timestamp();
		let exp = iat + config.access_token_lifetime.num_seconds();

		Self { sub: user.id, role: user.role, iat, exp }
	}

	/// Sign these claims into a bearer token
	///
	/// # Errors
	/// Fails if encoding the token fails
	pub fn sign(&self, config: &Config) -> Result<String, Error> {
		let token = encode(
			&Header::default(),
			self,
			&EncodingKey::from_secret(config.jwt_secret.as_bytes()),
		)
		.map_err(InternalServerError::TokenSigningError)?;

		Ok(token)
	}

	/// Verify a bearer token and recover its [`Claims`]
	///
	/// # Errors
	/// Fails if the signature is invalid or the token has expired
	pub fn verify(token: &str, config: &Config) -> Result<Self, Error> {
		let data = decode::<Self>(
			token,
			&DecodingKey::from_secret(config.jwt_secret.as_bytes()),
			&Validation::default(),
		)
		.map_err(|e| {
			info!("rejected bearer token -- {e}");

			Error::Unauthorized("invalid or expired token")
		})?;

		Ok(data.claims)
	}
}
