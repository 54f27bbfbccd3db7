use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::Error;
use crate::models::{
	Booking,
	BookingFilters,
	BookingStatus,
	PaymentStatus,
	Room,
};
use crate::schemas::room::RoomSummary;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
	#[validate(length(
		min = 1,
		message = "customer name must not be empty",
		code = "customer-name-length"
	))]
	pub customer_name:    String,
	#[validate(email(message = "invalid email", code = "customer-email"))]
	pub customer_email:   String,
	#[validate(length(
		min = 1,
		message = "customer phone must not be empty",
		code = "customer-phone-length"
	))]
	pub customer_phone:   String,
	pub room_id:          i32,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
	#[validate(range(
		min = 1,
		message = "number of guests must be at least 1",
		code = "number-of-guests-range"
	))]
	pub number_of_guests: i32,
	#[serde(default)]
	pub special_requests: String,
}

/// Admin booking list parameters
///
/// `status` comes in as free text so the legacy `all` sentinel can be
/// accepted alongside the real status names
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookingListQuery {
	pub status: Option<String>,
	pub search: Option<String>,
}

impl BookingListQuery {
	/// Convert these parameters into model-level filters
	///
	/// # Errors
	/// Fails with a validation error on an unknown status name
	pub fn into_filters(self) -> Result<BookingFilters, Error> {
		let status = match self.status.as_deref() {
			None | Some("all") => None,
			Some("pending") => Some(BookingStatus::Pending),
			Some("confirmed") => Some(BookingStatus::Confirmed),
			Some("cancelled") => Some(BookingStatus::Cancelled),
			Some("completed") => Some(BookingStatus::Completed),
			Some(other) => {
				return Err(Error::ValidationError(format!(
					"unknown booking status '{other}'"
				)));
			},
		};

		Ok(BookingFilters { status, search: self.search })
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateBookingStatusRequest {
	pub status: BookingStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
	pub payment_status: PaymentStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
	pub id:               i32,
	pub reference_number: String,
	pub customer_name:    String,
	pub customer_email:   String,
	pub customer_phone:   String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub room:             Option<RoomSummary>,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
	pub number_of_guests: i32,
	pub special_requests: String,
	pub status:           BookingStatus,
	pub payment_status:   PaymentStatus,
	pub total_amount:     f64,
	pub created_at:       NaiveDateTime,
}

impl From<Booking> for BookingResponse {
	fn from(value: Booking) -> Self {
		Self {
			id: value.id,
			reference_number: value.reference_number,
			customer_name: value.customer_name,
			customer_email: value.customer_email,
			customer_phone: value.customer_phone,
			room: None,
			check_in: value.check_in,
			check_out: value.check_out,
			number_of_guests: value.number_of_guests,
			special_requests: value.special_requests,
			status: value.status,
			payment_status: value.payment_status,
			total_amount: value.total_amount,
			created_at: value.created_at,
		}
	}
}

impl From<(Booking, Room)> for BookingResponse {
	fn from((booking, room): (Booking, Room)) -> Self {
		let mut response = Self::from(booking);
		response.room = Some(room.into());

		response
	}
}
