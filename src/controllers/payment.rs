//! Controllers for payment confirmation
//!
//! Confirmation is a status flag flip, not a gateway transaction; the payment
//! detail payload is stored verbatim

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::identity::Identity;
use crate::models::Booking;
use crate::schemas::booking::BookingResponse;
use crate::schemas::payment::ConfirmPaymentRequest;
use crate::{DbPool, Error};

#[instrument(skip(pool, _identity, request))]
pub(crate) async fn confirm_payment(
	State(pool): State<DbPool>,
	_identity: Identity,
	Json(request): Json<ConfirmPaymentRequest>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking = Booking::confirm_payment(
		request.booking_id,
		request.payment_details,
		&conn,
	)
	.await?;

	info!(
		"confirmed payment for booking {} ({})",
		booking.id, booking.reference_number
	);

	Ok((
		StatusCode::OK,
		Json(json!({
			"message": "Payment confirmed successfully",
			"booking": BookingResponse::from(booking),
		})),
	))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_my_paid_billings(
	State(pool): State<DbPool>,
	identity: Identity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let bookings =
		Booking::paid_for_customer(identity.user.email, &conn).await?;
	let response: Vec<BookingResponse> =
		bookings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}
