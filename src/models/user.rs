use chrono::NaiveDateTime;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use crate::schema::account;
use crate::{DbConn, Error};

#[derive(
	Clone,
	Copy,
	DbEnum,
	Debug,
	Default,
	Deserialize,
	Eq,
	PartialEq,
	Serialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
	#[default]
	User,
	Admin,
}

/// A single account
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = account)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id:             i32,
	pub full_name:      String,
	pub email:          String,
	pub username:       String,
	#[serde(skip)]
	pub password_hash:  String,
	pub role:           UserRole,
	pub job_title:      Option<String>,
	pub contact_number: Option<String>,
	pub created_at:     NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = account)]
pub struct NewUser {
	pub full_name:      String,
	pub email:          String,
	pub username:       String,
	pub password_hash:  String,
	pub role:           UserRole,
	pub job_title:      Option<String>,
	pub contact_number: Option<String>,
}

impl NewUser {
	/// Insert this [`NewUser`]
	pub async fn insert(self, conn: &DbConn) -> Result<User, Error> {
		let user = conn
			.interact(|conn| {
				diesel::insert_into(account::table)
					.values(self)
					.returning(User::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(user)
	}
}

impl User {
	/// Get a [`User`] given its id
	pub async fn get(query_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let user = conn
			.interact(move |conn| {
				account::table.find(query_id).get_result(conn)
			})
			.await??;

		Ok(user)
	}

	/// Get a [`User`] given its username, if any
	pub async fn get_by_username(
		query_username: String,
		conn: &DbConn,
	) -> Result<Option<Self>, Error> {
		let user = conn
			.interact(|conn| {
				account::table
					.filter(account::username.eq(query_username))
					.first(conn)
					.optional()
			})
			.await??;

		Ok(user)
	}

	/// Get a [`User`] given its email, if any
	pub async fn get_by_email(
		query_email: String,
		conn: &DbConn,
	) -> Result<Option<Self>, Error> {
		let user = conn
			.interact(|conn| {
				account::table
					.filter(account::email.eq(query_email))
					.first(conn)
					.optional()
			})
			.await??;

		Ok(user)
	}

	/// Check if a [`User`] with a given email exists
	pub async fn email_exists(
		query_email: String,
		conn: &DbConn,
	) -> Result<bool, Error> {
		let exists = conn
			.interact(|conn| {
				diesel::select(diesel::dsl::exists(
					account::table.filter(account::email.eq(query_email)),
				))
				.get_result(conn)
			})
			.await??;

		Ok(exists)
	}

	/// Check if a [`User`] with a given username exists
	pub async fn username_exists(
		query_username: String,
		conn: &DbConn,
	) -> Result<bool, Error> {
		let exists = conn
			.interact(|conn| {
				diesel::select(diesel::dsl::exists(
					account::table
						.filter(account::username.eq(query_username)),
				))
				.get_result(conn)
			})
			.await??;

		Ok(exists)
	}
}
