use chrono::NaiveDateTime;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::review;
use crate::{DbConn, Error};

/// A post-stay review, immutable once created
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = review)]
#[diesel(check_for_backend(Pg))]
pub struct Review {
	pub id:                i32,
	pub booking_id:        i32,
	pub account_id:        i32,
	pub room_id:           i32,
	pub overall_rating:    i32,
	pub service_quality:   i32,
	pub room_quality:      i32,
	pub detailed_feedback: Option<String>,
	pub created_at:        NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = review)]
pub struct NewReview {
	pub booking_id:        i32,
	pub account_id:        i32,
	pub room_id:           i32,
	pub overall_rating:    i32,
	pub service_quality:   i32,
	pub room_quality:      i32,
	pub detailed_feedback: Option<String>,
}

impl NewReview {
	/// Insert this [`NewReview`]
	pub async fn insert(self, conn: &DbConn) -> Result<Review, Error> {
		let created = conn
			.interact(|conn| {
				diesel::insert_into(review::table)
					.values(self)
					.returning(Review::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(created)
	}
}

impl Review {
	/// Get all [`Review`]s for a room, newest first
	pub async fn for_room(
		query_room_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let reviews = conn
			.interact(move |conn| {
				review::table
					.filter(review::room_id.eq(query_room_id))
					.order(review::created_at.desc())
					.load(conn)
			})
			.await??;

		Ok(reviews)
	}

	/// Get all [`Review`]s written by an account, newest first
	pub async fn for_account(
		query_account_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let reviews = conn
			.interact(move |conn| {
				review::table
					.filter(review::account_id.eq(query_account_id))
					.order(review::created_at.desc())
					.load(conn)
			})
			.await??;

		Ok(reviews)
	}
}
