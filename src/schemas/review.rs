use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
	pub booking_id:        i32,
	pub room_id:           i32,
	#[validate(range(
		min = 1,
		max = 5,
		message = "overall rating must be between 1 and 5",
		code = "overall-rating-range"
	))]
	pub overall_rating:    i32,
	#[validate(range(
		min = 1,
		max = 5,
		message = "service quality must be between 1 and 5",
		code = "service-quality-range"
	))]
	pub service_quality:   i32,
	#[validate(range(
		min = 1,
		max = 5,
		message = "room quality must be between 1 and 5",
		code = "room-quality-range"
	))]
	pub room_quality:      i32,
	pub detailed_feedback: Option<String>,
}
