use chrono::NaiveDateTime;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking::BookingStatus;
use crate::schema::booking_activity;
use crate::{DbConn, Error};

/// An append-only audit entry describing a booking status or payment change
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = booking_activity)]
#[diesel(check_for_backend(Pg))]
pub struct BookingActivity {
	pub id:         i32,
	pub booking_id: i32,
	pub activity:   String,
	pub status:     BookingStatus,
	pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = booking_activity)]
pub struct NewBookingActivity {
	pub booking_id: i32,
	pub activity:   String,
	pub status:     BookingStatus,
}

impl NewBookingActivity {
	/// Append this activity record on an already-checked-out connection
	///
	/// Used by the booking mutations so that every status or payment
	/// transition leaves exactly one audit entry
	pub(crate) fn insert_sync(
		self,
		conn: &mut PgConnection,
	) -> Result<BookingActivity, diesel::result::Error> {
		diesel::insert_into(booking_activity::table)
			.values(self)
			.returning(BookingActivity::as_returning())
			.get_result(conn)
	}
}

impl BookingActivity {
	/// Get the audit trail for a booking, oldest first
	pub async fn for_booking(
		query_booking_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let activities = conn
			.interact(move |conn| {
				booking_activity::table
					.filter(booking_activity::booking_id.eq(query_booking_id))
					.order(booking_activity::id.asc())
					.load(conn)
			})
			.await??;

		Ok(activities)
	}
}
