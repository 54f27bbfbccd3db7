use chrono::NaiveDateTime;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use crate::schema::room;
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
#[ExistingTypePath = "crate::schema::sql_types::RoomStatus"]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
	#[default]
	Available,
	Occupied,
	Maintenance,
}

/// A single room in the catalog
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = room)]
#[diesel(check_for_backend(Pg))]
pub struct Room {
	pub id:          i32,
	pub room_number: String,
	pub room_type:   String,
	pub price:       f64,
	pub capacity:    i32,
	pub amenities:   Vec<String>,
	pub description: String,
	pub images:      Vec<String>,
	pub status:      RoomStatus,
	pub rating:      f64,
	pub created_at:  NaiveDateTime,
	pub updated_at:  NaiveDateTime,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = room)]
pub struct NewRoom {
	pub room_number: String,
	pub room_type:   String,
	pub price:       f64,
	pub capacity:    i32,
	pub amenities:   Vec<String>,
	pub description: String,
	pub images:      Vec<String>,
	pub status:      RoomStatus,
	pub rating:      f64,
}

#[derive(Clone, Debug, AsChangeset)]
#[diesel(table_name = room)]
pub struct RoomUpdate {
	pub room_number: Option<String>,
	pub room_type:   Option<String>,
	pub price:       Option<f64>,
	pub capacity:    Option<i32>,
	pub amenities:   Option<Vec<String>>,
	pub description: Option<String>,
	pub images:      Option<Vec<String>>,
	pub status:      Option<RoomStatus>,
	pub rating:      Option<f64>,
}

impl RoomUpdate {
	fn is_empty(&self) -> bool {
		self.room_number.is_none()
			&& self.room_type.is_none()
			&& self.price.is_none()
			&& self.capacity.is_none()
			&& self.amenities.is_none()
			&& self.description.is_none()
			&& self.images.is_none()
			&& self.status.is_none()
			&& self.rating.is_none()
	}
}

/// Conjunctive filters for the room catalog listing
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilters {
	pub rating:         Option<f64>,
	pub room_type:      Option<String>,
	pub available_only: Option<bool>,
}

impl RoomFilters {
	fn apply(
		&self,
		mut query: room::BoxedQuery<'static, Pg>,
	) -> room::BoxedQuery<'static, Pg> {
		if let Some(rating) = self.rating {
			query = query.filter(room::rating.ge(rating));
		}

		if let Some(room_type) = self.room_type.clone() {
			query = query.filter(room::room_type.eq(room_type));
		}

		if self.available_only == Some(true) {
			query = query.filter(room::status.eq(RoomStatus::Available));
		}

		query
	}
}

/// One row of the per-type availability summary
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct RoomTypeSummary {
	#[diesel(sql_type = Text)]
	#[serde(rename = "type")]
	pub room_type: String,
	#[diesel(sql_type = BigInt)]
	pub total:     i64,
	#[diesel(sql_type = BigInt)]
	pub available: i64,
}

impl NewRoom {
	/// Insert this [`NewRoom`]
	pub async fn insert(self, conn: &DbConn) -> Result<Room, Error> {
		let room = conn
			.interact(|conn| {
				diesel::insert_into(room::table)
					.values(self)
					.returning(Room::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(room)
	}

	/// Insert a batch of [`NewRoom`]s in one statement
	pub async fn insert_bulk(
		rooms: Vec<Self>,
		conn: &DbConn,
	) -> Result<Vec<Room>, Error> {
		let rooms = conn
			.interact(|conn| {
				diesel::insert_into(room::table)
					.values(rooms)
					.returning(Room::as_returning())
					.get_results(conn)
			})
			.await??;

		Ok(rooms)
	}
}

impl Room {
	/// Get a page of [`Room`]s matching the given filters, along with the
	/// total number of matches
	pub async fn get_all(
		filters: RoomFilters,
		limit: i64,
		offset: i64,
		conn: &DbConn,
	) -> Result<(Vec<Self>, i64), Error> {
		let result = conn
			.interact(move |conn| {
				let rooms = filters
					.apply(room::table.into_boxed())
					.order(room::room_number.asc())
					.limit(limit)
					.offset(offset)
					.select(Self::as_select())
					.load(conn)?;

				let total = filters
					.apply(room::table.into_boxed())
					.count()
					.get_result(conn)?;

				Ok::<_, diesel::result::Error>((rooms, total))
			})
			.await??;

		Ok(result)
	}

	/// Get a [`Room`] given its id
	pub async fn get(query_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let room = conn
			.interact(move |conn| room::table.find(query_id).get_result(conn))
			.await??;

		Ok(room)
	}

	/// Get the first [`Room`] of a given type
	pub async fn get_by_type(
		query_type: String,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let room = conn
			.interact(|conn| {
				room::table
					.filter(room::room_type.eq(query_type))
					.order(room::room_number.asc())
					.first(conn)
			})
			.await??;

		Ok(room)
	}

	/// Merge the provided fields into an existing [`Room`]
	pub async fn update(
		query_id: i32,
		changes: RoomUpdate,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let room = conn
			.interact(move |conn| {
				// An all-None changeset is not a valid UPDATE statement;
				// hand the row back untouched instead
				if changes.is_empty() {
					return room::table.find(query_id).get_result(conn);
				}

				diesel::update(room::table.find(query_id))
					.set(changes)
					.returning(Self::as_returning())
					.get_result(conn)
			})
			.await??;

		Ok(room)
	}

	/// Delete a [`Room`] given its id
	pub async fn delete(query_id: i32, conn: &DbConn) -> Result<(), Error> {
		let deleted = conn
			.interact(move |conn| {
				diesel::delete(room::table.find(query_id)).execute(conn)
			})
			.await??;

		if deleted == 0 {
			return Err(Error::EntityNotFoundError);
		}

		Ok(())
	}

	/// Delete every [`Room`] unconditionally
	pub async fn delete_all(conn: &DbConn) -> Result<usize, Error> {
		let deleted = conn
			.interact(|conn| diesel::delete(room::table).execute(conn))
			.await??;

		Ok(deleted)
	}

	/// Per-type `{type, total, available}` counts for the catalog page
	pub async fn type_summary(
		conn: &DbConn,
	) -> Result<Vec<RoomTypeSummary>, Error> {
		let summary = conn
			.interact(|conn| {
				diesel::sql_query(
					"SELECT room_type, COUNT(*) AS total, \
					 COUNT(*) FILTER (WHERE status = 'available') AS \
					 available FROM room GROUP BY room_type ORDER BY \
					 room_type",
				)
				.load(conn)
			})
			.await??;

		Ok(summary)
	}
}
