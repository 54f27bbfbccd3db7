use serde::{Deserialize, Serialize};

/// Payment confirmation request
///
/// `payment_details` is an arbitrary payload stored verbatim; no gateway is
/// involved
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
	pub booking_id:      i32,
	#[serde(default)]
	pub payment_details: Option<serde_json::Value>,
}
