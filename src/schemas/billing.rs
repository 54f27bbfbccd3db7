use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::{
	Billing,
	BillingStatus,
	BillingUpdate,
	Booking,
	PaymentMethod,
	PaymentStatus,
	Room,
	User,
};
use crate::schemas::room::RoomSummary;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillingRequest {
	pub booking_id:     i32,
	pub room_id:        i32,
	#[validate(range(
		min = 0.01,
		message = "amount must be positive",
		code = "amount-range"
	))]
	pub amount:         f64,
	#[validate(length(
		min = 1,
		message = "description must not be empty",
		code = "description-length"
	))]
	pub description:    String,
	#[serde(default)]
	pub status:         BillingStatus,
	#[serde(default)]
	pub payment_method: PaymentMethod,
}

/// Partial billing update; absent fields are left untouched
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillingRequest {
	#[validate(range(
		min = 0.01,
		message = "amount must be positive",
		code = "amount-range"
	))]
	pub amount:         Option<f64>,
	pub description:    Option<String>,
	pub status:         Option<BillingStatus>,
	pub payment_method: Option<PaymentMethod>,
}

impl From<UpdateBillingRequest> for BillingUpdate {
	fn from(value: UpdateBillingRequest) -> Self {
		Self {
			amount:         value.amount,
			description:    value.description,
			status:         value.status,
			payment_method: value.payment_method,
		}
	}
}

/// The booking projection embedded in billing responses
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
	pub reference_number: String,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
}

impl From<Booking> for BookingSummary {
	fn from(value: Booking) -> Self {
		Self {
			reference_number: value.reference_number,
			check_in:         value.check_in,
			check_out:        value.check_out,
		}
	}
}

/// The account projection embedded in admin billing responses
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
	pub name:  String,
	pub email: String,
}

impl From<User> for UserSummary {
	fn from(value: User) -> Self {
		Self { name: value.full_name, email: value.email }
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingResponse {
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
	#[serde(skip_serializing_if = "Option::is_none")]
	pub booking:        Option<BookingSummary>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub room:           Option<RoomSummary>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user:           Option<UserSummary>,
}

impl From<Billing> for BillingResponse {
	fn from(value: Billing) -> Self {
		Self {
			id: value.id,
			booking_id: value.booking_id,
			account_id: value.account_id,
			room_id: value.room_id,
			amount: value.amount,
			description: value.description,
			status: value.status,
			payment_method: value.payment_method,
			created_at: value.created_at,
			updated_at: value.updated_at,
			booking: None,
			room: None,
			user: None,
		}
	}
}

impl From<(Billing, Room)> for BillingResponse {
	fn from((billing, room): (Billing, Room)) -> Self {
		let mut response = Self::from(billing);
		response.room = Some(room.into());

		response
	}
}

impl From<(Billing, Booking, Room)> for BillingResponse {
	fn from((billing, booking, room): (Billing, Booking, Room)) -> Self {
		let mut response = Self::from((billing, room));
		response.booking = Some(booking.into());

		response
	}
}

impl From<(Billing, Booking, Room, User)> for BillingResponse {
	fn from(
		(billing, booking, room, user): (Billing, Booking, Room, User),
	) -> Self {
		let mut response = Self::from((billing, booking, room));
		response.user = Some(user.into());

		response
	}
}

/// Flattened booking + room view for the admin invoice display
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBillResponse {
	pub id:               i32,
	pub reference_number: String,
	pub customer_name:    String,
	pub customer_email:   String,
	pub room:             String,
	pub check_in:         NaiveDate,
	pub check_out:        NaiveDate,
	pub total_amount:     f64,
	pub payment_status:   PaymentStatus,
}

impl From<(Booking, Room)> for CustomerBillResponse {
	fn from((booking, room): (Booking, Room)) -> Self {
		Self {
			id:               booking.id,
			reference_number: booking.reference_number,
			customer_name:    booking.customer_name,
			customer_email:   booking.customer_email,
			room:             room.room_number,
			check_in:         booking.check_in,
			check_out:        booking.check_out,
			total_amount:     booking.total_amount,
			payment_status:   booking.payment_status,
		}
	}
}
