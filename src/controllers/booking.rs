//! Controllers for bookings and their audit trail

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use validator::Validate;

use crate::identity::{AdminIdentity, Identity};
use crate::models::{
	Booking,
	BookingActivity,
	BookingStatus,
	NewBooking,
	PaymentStatus,
	Room,
};
use crate::schemas::booking::{
	BookingListQuery,
	BookingResponse,
	CreateBookingRequest,
	UpdateBookingStatusRequest,
	UpdatePaymentStatusRequest,
};
use crate::{DbPool, Error};

#[instrument(skip(pool, _admin))]
pub(crate) async fn get_bookings(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, Error> {
	let filters = query.into_filters()?;

	let conn = pool.get().await?;

	let bookings = Booking::get_all(filters, &conn).await?;
	let response: Vec<BookingResponse> =
		bookings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn get_booking(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking = Booking::get(id, &conn).await?;

	Ok((StatusCode::OK, Json(BookingResponse::from(booking))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn get_booking_activities(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	// 404 for unknown bookings rather than an empty trail
	let _ = Booking::get(id, &conn).await?;

	let activities = BookingActivity::for_booking(id, &conn).await?;

	Ok((StatusCode::OK, Json(activities)))
}

#[instrument(skip(pool, request))]
pub(crate) async fn create_booking(
	State(pool): State<DbPool>,
	Json(request): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let room = Room::get(request.room_id, &conn).await?;

	let new_booking = NewBooking {
		reference_number: Booking::generate_reference_number(),
		customer_name: request.customer_name,
		customer_email: request.customer_email,
		customer_phone: request.customer_phone,
		room_id: room.id,
		check_in: request.check_in,
		check_out: request.check_out,
		number_of_guests: request.number_of_guests,
		special_requests: request.special_requests,
		status: BookingStatus::Pending,
		payment_status: PaymentStatus::Pending,
		total_amount: room.price,
	};

	let booking = new_booking.insert(&conn).await?;

	info!(
		"created booking {} ({}) for room {}",
		booking.id, booking.reference_number, room.room_number
	);

	Ok((StatusCode::CREATED, Json(BookingResponse::from((booking, room)))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn update_booking_status(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
	Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking = Booking::set_status(id, request.status, &conn).await?;

	Ok((StatusCode::OK, Json(BookingResponse::from(booking))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn update_payment_status(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
	Json(request): Json<UpdatePaymentStatusRequest>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking =
		Booking::set_payment_status(id, request.payment_status, &conn)
			.await?;

	Ok((StatusCode::OK, Json(BookingResponse::from(booking))))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_my_bookings(
	State(pool): State<DbPool>,
	identity: Identity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let bookings =
		Booking::for_customer(identity.user.email, &conn).await?;
	let response: Vec<BookingResponse> =
		bookings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn cancel_booking(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking = Booking::cancel(id, &conn).await?;

	info!("cancelled booking {} ({})", booking.id, booking.reference_number);

	Ok((StatusCode::OK, Json(json!({ "message": "Booking cancelled" }))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn delete_cancelled_bookings(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let deleted = Booking::delete_cancelled(&conn).await?;

	info!("purged {deleted} cancelled bookings");

	Ok((
		StatusCode::OK,
		Json(json!({ "message": "Cancelled bookings deleted" })),
	))
}
