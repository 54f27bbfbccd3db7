//! Controllers for billing records and the admin invoice view

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use validator::Validate;

use crate::identity::{AdminIdentity, Identity};
use crate::models::{Billing, Booking, NewBilling};
use crate::schemas::billing::{
	BillingResponse,
	CreateBillingRequest,
	CustomerBillResponse,
	UpdateBillingRequest,
};
use crate::{DbPool, Error};

#[instrument(skip(pool, identity))]
pub(crate) async fn create_billing(
	State(pool): State<DbPool>,
	identity: Identity,
	Json(request): Json<CreateBillingRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let new_billing = NewBilling {
		booking_id:     request.booking_id,
		account_id:     identity.user.id,
		room_id:        request.room_id,
		amount:         request.amount,
		description:    request.description,
		status:         request.status,
		payment_method: request.payment_method,
	};

	let billing = new_billing.insert(&conn).await?;

	Ok((StatusCode::CREATED, Json(BillingResponse::from(billing))))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_my_billings(
	State(pool): State<DbPool>,
	identity: Identity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let billings = Billing::for_account(identity.user.id, &conn).await?;
	let response: Vec<BillingResponse> =
		billings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_booking_billings(
	State(pool): State<DbPool>,
	identity: Identity,
	Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let billings =
		Billing::for_booking(booking_id, identity.user.id, &conn).await?;
	let response: Vec<BillingResponse> =
		billings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_billing(
	State(pool): State<DbPool>,
	identity: Identity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let (billing, booking, room) = Billing::get(id, &conn).await?;

	identity.authorize_owner(billing.account_id)?;

	Ok((StatusCode::OK, Json(BillingResponse::from((billing, booking, room)))))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn update_billing(
	State(pool): State<DbPool>,
	identity: Identity,
	Path(id): Path<i32>,
	Json(request): Json<UpdateBillingRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let (billing, _, _) = Billing::get(id, &conn).await?;

	identity.authorize_owner(billing.account_id)?;

	let updated = Billing::update(id, request.into(), &conn).await?;

	Ok((StatusCode::OK, Json(BillingResponse::from(updated))))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn delete_billing(
	State(pool): State<DbPool>,
	identity: Identity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let (billing, _, _) = Billing::get(id, &conn).await?;

	identity.authorize_owner(billing.account_id)?;

	Billing::delete(id, &conn).await?;

	Ok((StatusCode::OK, Json(json!({ "message": "Billing deleted" }))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn get_admin_billings(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let billings = Billing::get_all(&conn).await?;
	let response: Vec<BillingResponse> =
		billings.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn get_customer_bill(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let booking = Booking::get(booking_id, &conn).await?;

	Ok((StatusCode::OK, Json(CustomerBillResponse::from(booking))))
}
