//! Authenticated caller identities and the authorization predicate

use axum::RequestPartsExt;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;

use crate::error::{Error, InternalServerError};
use crate::models::{User, UserRole};
use crate::{AppState, DbPool, UserId};

/// The authenticated caller
///
/// ```rs
/// pub async fn foo_route(identity: Identity) -> impl IntoResponse {
///     println!("{:?}", identity.user.id);
///
///     ()
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Identity {
	pub user: User,
}

/// The authenticated caller, guaranteed to have the admin role
#[derive(Clone, Debug)]
pub struct AdminIdentity {
	pub user: User,
}

impl FromRequestParts<AppState> for Identity {
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let user_id = match parts.extensions.get::<UserId>() {
			Some(id) => **id,
			None => {
				return Err(
					InternalServerError::IdentityWithoutAuthError.into()
				);
			},
		};

		let State(pool) = parts
			.extract_with_state::<State<DbPool>, AppState>(state)
			.await
			.map_err(|_| Error::InternalServerError)?;

		let conn = pool.get().await?;

		let user = User::get(user_id, &conn).await.map_err(|e| match e {
			// The credential outlived its account
			Error::EntityNotFoundError => {
				warn!("rejected token for unknown account {user_id}");

				Error::Unauthorized("unknown account")
			},
			e => e,
		})?;

		Ok(Self { user })
	}
}

impl FromRequestParts<AppState> for AdminIdentity {
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let identity =
			parts.extract_with_state::<Identity, AppState>(state).await?;

		if identity.user.role != UserRole::Admin {
			debug!("account {} is not an admin", identity.user.id);

			return Err(Error::Forbidden);
		}

		Ok(Self { user: identity.user })
	}
}

impl Identity {
	/// Allow iff the caller owns the resource or is an admin
	pub fn authorize_owner(&self, owner_id: i32) -> Result<(), Error> {
		if self.user.id == owner_id || self.user.role == UserRole::Admin {
			Ok(())
		} else {
			debug!(
				"account {} denied access to resource owned by {owner_id}",
				self.user.id
			);

			Err(Error::Forbidden)
		}
	}
}
