use chrono::NaiveDateTime;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use super::booking::Booking;
use super::room::Room;
use super::user::User;
use crate::schema::{account, billing, booking, room};
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
#[ExistingTypePath = "crate::schema::sql_types::BillingStatus"]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
	Paid,
	#[default]
	Pending,
	Partial,
}

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
#[ExistingTypePath = "crate::schema::sql_types::PaymentMethod"]
pub enum PaymentMethod {
	#[default]
	#[serde(rename = "cash")]
	Cash,
	#[db_rename = "credit card"]
	#[serde(rename = "credit card")]
	CreditCard,
	#[db_rename = "bank transfer"]
	#[serde(rename = "bank transfer")]
	BankTransfer,
	#[db_rename = "online payment"]
	#[serde(rename = "online payment")]
	OnlinePayment,
}

/// A single billing record
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = billing)]
#[diesel(check_for_backend(Pg))]
pub struct Billing {
	pub id:             i32,
	pub booking_id:     i32,
	pub account_id:     i32,
	pub room_id:        i32,
	pub amount:         f64,
	pub description:    String,
	pub status:         BillingStatus,
	pub payment_method: PaymentMethod,
	pub created_at:     NaiveDateTime,
	pub updated_at:     NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = billing)]
pub struct NewBilling {
	pub booking_id:     i32,
	pub account_id:     i32,
	pub room_id:        i32,
	pub amount:         f64,
	pub description:    String,
	pub status:         BillingStatus,
	pub payment_method: PaymentMethod,
}

#[derive(Clone, Debug, AsChangeset)]
#[diesel(table_name = billing)]
pub struct BillingUpdate {
	pub amount:         Option<f64>,
	pub description:    Option<String>,
	pub status:         Option<BillingStatus>,
	pub payment_method: Option<PaymentMethod>,
}

impl BillingUpdate {
	fn is_empty(&self) -> bool {
		self.amount.is_none()
			&& self.description.is_none()
			&& self.status.is_none()
			&& self.payment_method.is_none()
	}
}

impl NewBilling {
	/// Insert this [`NewBilling`]
	pub async fn insert(self, conn: &DbConn) -> Result<Billing, Error> {
		let record = conn
			.interact(|conn| {
				diesel::insert_into(billing::table)
					.values(self)
					.returning(Billing::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(record)
	}
}

impl Billing {
	/// Get a [`Billing`] with its booking and room given its id
	pub async fn get(
		query_id: i32,
		conn: &DbConn,
	) -> Result<(Self, Booking, Room), Error> {
		let result = conn
			.interact(move |conn| {
				billing::table
					.inner_join(booking::table)
					.inner_join(room::table)
					.filter(billing::id.eq(query_id))
					.select((
						Self::as_select(),
						Booking::as_select(),
						Room::as_select(),
					))
					.get_result(conn)
			})
			.await??;

		Ok(result)
	}

	/// Get all [`Billing`]s owned by an account, booking and room expanded
	pub async fn for_account(
		query_account_id: i32,
		conn: &DbConn,
	) -> Result<Vec<(Self, Booking, Room)>, Error> {
		let results = conn
			.interact(move |conn| {
				billing::table
					.inner_join(booking::table)
					.inner_join(room::table)
					.filter(billing::account_id.eq(query_account_id))
					.order(billing::created_at.desc())
					.select((
						Self::as_select(),
						Booking::as_select(),
						Room::as_select(),
					))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Get an account's [`Billing`]s for one booking, room expanded
	pub async fn for_booking(
		query_booking_id: i32,
		query_account_id: i32,
		conn: &DbConn,
	) -> Result<Vec<(Self, Room)>, Error> {
		let results = conn
			.interact(move |conn| {
				billing::table
					.inner_join(room::table)
					.filter(billing::booking_id.eq(query_booking_id))
					.filter(billing::account_id.eq(query_account_id))
					.order(billing::created_at.desc())
					.select((Self::as_select(), Room::as_select()))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Get every [`Billing`], fully expanded, for the admin console
	pub async fn get_all(
		conn: &DbConn,
	) -> Result<Vec<(Self, Booking, Room, User)>, Error> {
		let results = conn
			.interact(|conn| {
				billing::table
					.inner_join(booking::table)
					.inner_join(room::table)
					.inner_join(account::table)
					.order(billing::created_at.desc())
					.select((
						Self::as_select(),
						Booking::as_select(),
						Room::as_select(),
						User::as_select(),
					))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Merge the provided fields into an existing [`Billing`]
	pub async fn update(
		query_id: i32,
		changes: BillingUpdate,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let record = conn
			.interact(move |conn| {
				// An all-None changeset is not a valid UPDATE statement;
				// hand the row back untouched instead
				if changes.is_empty() {
					return billing::table.find(query_id).get_result(conn);
				}

				diesel::update(billing::table.find(query_id))
					.set(changes)
					.returning(Self::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(record)
	}

	/// Delete a [`Billing`] given its id
	pub async fn delete(query_id: i32, conn: &DbConn) -> Result<(), Error> {
		let deleted = conn
			.interact(move |conn| {
				diesel::delete(billing::table.find(query_id)).execute(conn)
			})
			.await??;

		if deleted == 0 {
			return Err(Error::EntityNotFoundError);
		}

		Ok(())
	}
}
