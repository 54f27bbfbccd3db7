use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::{
	NewRoom,
	Room,
	RoomFilters,
	RoomStatus,
	RoomTypeSummary,
	RoomUpdate,
};

const fn page_default() -> u32 { 1 }

const fn limit_default() -> u32 { 8 }

const fn capacity_default() -> i32 { 1 }

/// Room catalog listing parameters: pagination plus conjunctive filters
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
	#[serde(default = "page_default")]
	pub page:           u32,
	#[serde(default = "limit_default")]
	pub limit:          u32,
	pub rating:         Option<f64>,
	pub room_type:      Option<String>,
	pub available_only: Option<bool>,
}

impl RoomListQuery {
	#[must_use]
	pub fn filters(&self) -> RoomFilters {
		RoomFilters {
			rating:         self.rating,
			room_type:      self.room_type.clone(),
			available_only: self.available_only,
		}
	}

	/// Calculate the SQL LIMIT value of these parameters
	#[inline]
	#[must_use]
	pub fn limit(&self) -> i64 { self.limit.into() }

	/// Calculate the SQL OFFSET value of these parameters
	#[inline]
	#[must_use]
	pub fn offset(&self) -> i64 {
		(self.page.max(1) - 1).saturating_mul(self.limit).into()
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListResponse {
	pub rooms:       Vec<Room>,
	pub total_rooms: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoomTypeSummaryResponse {
	pub summary: Vec<RoomTypeSummary>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
	#[validate(length(
		min = 1,
		message = "room number must not be empty",
		code = "room-number-length"
	))]
	pub room_number: String,
	#[validate(length(
		min = 1,
		message = "room type must not be empty",
		code = "room-type-length"
	))]
	pub room_type:   String,
	#[validate(range(
		min = 0.0,
		message = "price must not be negative",
		code = "price-range"
	))]
	pub price:       f64,
	#[serde(default = "capacity_default")]
	pub capacity:    i32,
	#[serde(default)]
	pub amenities:   Vec<String>,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub images:      Vec<String>,
	#[serde(default)]
	pub status:      RoomStatus,
	#[serde(default)]
	pub rating:      f64,
}

impl From<CreateRoomRequest> for NewRoom {
	fn from(value: CreateRoomRequest) -> Self {
		Self {
			room_number: value.room_number,
			room_type:   value.room_type,
			price:       value.price,
			capacity:    value.capacity,
			amenities:   value.amenities,
			description: value.description,
			images:      value.images,
			status:      value.status,
			rating:      value.rating,
		}
	}
}

/// Partial room update; absent fields are left untouched
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
	pub room_number: Option<String>,
	pub room_type:   Option<String>,
	#[validate(range(
		min = 0.0,
		message = "price must not be negative",
		code = "price-range"
	))]
	pub price:       Option<f64>,
	pub capacity:    Option<i32>,
	pub amenities:   Option<Vec<String>>,
	pub description: Option<String>,
	pub images:      Option<Vec<String>>,
	pub status:      Option<RoomStatus>,
	pub rating:      Option<f64>,
}

impl From<UpdateRoomRequest> for RoomUpdate {
	fn from(value: UpdateRoomRequest) -> Self {
		Self {
			room_number: value.room_number,
			room_type:   value.room_type,
			price:       value.price,
			capacity:    value.capacity,
			amenities:   value.amenities,
			description: value.description,
			images:      value.images,
			status:      value.status,
			rating:      value.rating,
		}
	}
}

/// The room projection embedded in booking and billing responses
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
	pub room_number: String,
	pub room_type:   String,
	pub price:       f64,
}

impl From<Room> for RoomSummary {
	fn from(value: Room) -> Self {
		Self {
			room_number: value.room_number,
			room_type:   value.room_type,
			price:       value.price,
		}
	}
}
