use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use super::booking_activity::NewBookingActivity;
use super::room::Room;
use crate::schema::{booking, room};
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
#[ExistingTypePath = "crate::schema::sql_types::BookingStatus"]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
	#[default]
	Pending,
	Confirmed,
	Cancelled,
	Completed,
}

impl std::fmt::Display for BookingStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let repr = match self {
			Self::Pending => "pending",
			Self::Confirmed => "confirmed",
			Self::Cancelled => "cancelled",
			Self::Completed => "completed",
		};

		write!(f, "{repr}")
	}
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
#[ExistingTypePath = "crate::schema::sql_types::PaymentStatus"]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
	#[default]
	Pending,
	Partial,
	Paid,
}

impl std::fmt::Display for PaymentStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let repr = match self {
			Self::Pending => "pending",
			Self::Partial => "partial",
			Self::Paid => "paid",
		};

		write!(f, "{repr}")
	}
}

/// A single booking
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(Pg))]
pub struct Booking {
	pub id:               i32,
	pub reference_number: String,
	pub customer_name:    String,
	pub customer_email:   String,
	pub customer_phone:   String,
	pub room_id:          i32,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
	pub number_of_guests: i32,
	pub special_requests: String,
	pub status:           BookingStatus,
	pub payment_status:   PaymentStatus,
	pub total_amount:     f64,
	pub payment_details:  Option<serde_json::Value>,
	pub created_at:       NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = booking)]
pub struct NewBooking {
	pub reference_number: String,
	pub customer_name:    String,
	pub customer_email:   String,
	pub customer_phone:   String,
	pub room_id:          i32,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
	pub number_of_guests: i32,
	pub special_requests: String,
	pub status:           BookingStatus,
	pub payment_status:   PaymentStatus,
	pub total_amount:     f64,
}

/// Conjunctive filters for the admin booking list
#[derive(Clone, Debug, Default)]
pub struct BookingFilters {
	pub status: Option<BookingStatus>,
	pub search: Option<String>,
}

impl Booking {
	/// Generate a human-shown booking reference number, distinct from the
	/// record id
	#[must_use]
	pub fn generate_reference_number() -> String {
		let millis = Utc::now().timestamp_millis().to_string();
		let tail = &millis[millis.len().saturating_sub(8)..];

		format!("BK{tail}")
	}

	/// Get a [`Booking`] with its room given its id
	pub async fn get(
		query_id: i32,
		conn: &DbConn,
	) -> Result<(Self, Room), Error> {
		let result = conn
			.interact(move |conn| {
				booking::table
					.inner_join(room::table)
					.filter(booking::id.eq(query_id))
					.select((Self::as_select(), Room::as_select()))
					.get_result(conn)
			})
			.await??;

		Ok(result)
	}

	/// Get all [`Booking`]s matching the given filters, newest first,
	/// with their rooms
	pub async fn get_all(
		filters: BookingFilters,
		conn: &DbConn,
	) -> Result<Vec<(Self, Room)>, Error> {
		let results = conn
			.interact(move |conn| {
				let mut query =
					booking::table.inner_join(room::table).into_boxed();

				if let Some(status) = filters.status {
					query = query.filter(booking::status.eq(status));
				}

				if let Some(search) = filters.search {
					let pattern = format!("%{search}%");

					query = query.filter(
						booking::customer_name
							.ilike(pattern.clone())
							.or(booking::reference_number.ilike(pattern)),
					);
				}

				query
					.order(booking::created_at.desc())
					.select((Self::as_select(), Room::as_select()))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Get all [`Booking`]s for a customer email, newest first
	pub async fn for_customer(
		email: String,
		conn: &DbConn,
	) -> Result<Vec<(Self, Room)>, Error> {
		let results = conn
			.interact(|conn| {
				booking::table
					.inner_join(room::table)
					.filter(booking::customer_email.eq(email))
					.order(booking::created_at.desc())
					.select((Self::as_select(), Room::as_select()))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Get all paid [`Booking`]s for a customer email, newest first
	pub async fn paid_for_customer(
		email: String,
		conn: &DbConn,
	) -> Result<Vec<(Self, Room)>, Error> {
		let results = conn
			.interact(|conn| {
				booking::table
					.inner_join(room::table)
					.filter(booking::customer_email.eq(email))
					.filter(booking::payment_status.eq(PaymentStatus::Paid))
					.order(booking::created_at.desc())
					.select((Self::as_select(), Room::as_select()))
					.load(conn)
			})
			.await??;

		Ok(results)
	}

	/// Set the status of a [`Booking`] and append the matching activity
	/// record
	pub async fn set_status(
		query_id: i32,
		new_status: BookingStatus,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let updated = conn
			.interact(move |conn| {
				let updated: Self =
					diesel::update(booking::table.find(query_id))
						.set(booking::status.eq(new_status))
						.returning(Self::as_returning())
						.get_result(conn)?;

				NewBookingActivity {
					booking_id: query_id,
					activity:   format!("Booking {new_status}"),
					status:     new_status,
				}
				.insert_sync(conn)?;

				Ok::<_, diesel::result::Error>(updated)
			})
			.await??;

		Ok(updated)
	}

	/// Set the payment status of a [`Booking`] and append the matching
	/// activity record
	pub async fn set_payment_status(
		query_id: i32,
		new_payment_status: PaymentStatus,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let updated = conn
			.interact(move |conn| {
				let updated: Self =
					diesel::update(booking::table.find(query_id))
						.set(booking::payment_status.eq(new_payment_status))
						.returning(Self::as_returning())
						.get_result(conn)?;

				NewBookingActivity {
					booking_id: query_id,
					activity:   format!("Payment {new_payment_status}"),
					status:     updated.status,
				}
				.insert_sync(conn)?;

				Ok::<_, diesel::result::Error>(updated)
			})
			.await??;

		Ok(updated)
	}

	/// Cancel a [`Booking`], appending the matching activity record
	///
	/// The record itself is kept; cancelled bookings are only removed by the
	/// admin bulk purge
	pub async fn cancel(query_id: i32, conn: &DbConn) -> Result<Self, Error> {
		Self::set_status(query_id, BookingStatus::Cancelled, conn).await
	}

	/// Mark a [`Booking`] as paid, storing the raw payment detail payload
	/// and appending the matching activity record
	pub async fn confirm_payment(
		query_id: i32,
		details: Option<serde_json::Value>,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let updated = conn
			.interact(move |conn| {
				let updated: Self =
					diesel::update(booking::table.find(query_id))
						.set((
							booking::payment_status.eq(PaymentStatus::Paid),
							booking::payment_details.eq(details),
						))
						.returning(Self::as_returning())
						.get_result(conn)?;

				NewBookingActivity {
					booking_id: query_id,
					activity:   format!("Payment {}", PaymentStatus::Paid),
					status:     updated.status,
				}
				.insert_sync(conn)?;

				Ok::<_, diesel::result::Error>(updated)
			})
			.await??;

		Ok(updated)
	}

	/// Bulk purge of all cancelled [`Booking`]s
	pub async fn delete_cancelled(conn: &DbConn) -> Result<usize, Error> {
		let deleted = conn
			.interact(|conn| {
				diesel::delete(
					booking::table.filter(
						booking::status.eq(BookingStatus::Cancelled),
					),
				)
				.execute(conn)
			})
			.await??;

		Ok(deleted)
	}
}

impl NewBooking {
	/// Insert this [`NewBooking`] and append its creation activity record
	pub async fn insert(self, conn: &DbConn) -> Result<Booking, Error> {
		let created = conn
			.interact(|conn| {
				let created: Booking = diesel::insert_into(booking::table)
					.values(self)
					.returning(Booking::as_returning())
					.get_result(conn)?;

				NewBookingActivity {
					booking_id: created.id,
					activity:   "Booking created".to_string(),
					status:     created.status,
				}
				.insert_sync(conn)?;

				Ok::<_, diesel::result::Error>(created)
			})
			.await??;

		Ok(created)
	}
}
