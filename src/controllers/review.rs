//! Controllers for post-stay reviews

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use validator::Validate;

use crate::identity::Identity;
use crate::models::{Booking, NewReview, Review};
use crate::schemas::review::CreateReviewRequest;
use crate::{DbPool, Error};

#[instrument(skip(pool, identity))]
pub(crate) async fn create_review(
	State(pool): State<DbPool>,
	identity: Identity,
	Json(request): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let _ = Booking::get(request.booking_id, &conn).await?;

	let new_review = NewReview {
		booking_id:        request.booking_id,
		account_id:        identity.user.id,
		room_id:           request.room_id,
		overall_rating:    request.overall_rating,
		service_quality:   request.service_quality,
		room_quality:      request.room_quality,
		detailed_feedback: request.detailed_feedback,
	};

	let review = new_review.insert(&conn).await?;

	Ok((StatusCode::CREATED, Json(review)))
}

#[instrument(skip(pool))]
pub(crate) async fn get_room_reviews(
	State(pool): State<DbPool>,
	Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let reviews = Review::for_room(room_id, &conn).await?;

	Ok((StatusCode::OK, Json(reviews)))
}

#[instrument(skip(pool, identity))]
pub(crate) async fn get_my_reviews(
	State(pool): State<DbPool>,
	identity: Identity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let reviews = Review::for_account(identity.user.id, &conn).await?;

	Ok((StatusCode::OK, Json(reviews)))
}
