use axum::http::StatusCode;

mod common;

use common::TestEnv;
use serde_json::json;

async fn seed_booking(
	env: &TestEnv,
	room_number: &str,
	customer_email: &str,
) -> i32 {
	let token = env.login_admin().await;

	let response = env
		.app
		.post("/api/rooms")
		.authorization_bearer(&token)
		.json(&json!({
			"roomNumber": room_number,
			"roomType": "Presidential",
			"price": 500.0,
		}))
		.await;
	assert_eq!(response.status_code(), StatusCode::CREATED);

	let room_id =
		response.json::<serde_json::Value>()["id"].as_i64().unwrap() as i32;

	let response = env
		.app
		.post("/api/bookings")
		.json(&json!({
			"customerName": "Bob",
			"customerEmail": customer_email,
			"customerPhone": "+32470000000",
			"roomId": room_id,
			"checkIn": "2026-09-01",
			"checkOut": "2026-09-05",
			"numberOfGuests": 2,
		}))
		.await;
	assert_eq!(response.status_code(), StatusCode::CREATED);

	response.json::<serde_json::Value>()["id"].as_i64().unwrap() as i32
}

#[tokio::test(flavor = "multi_thread")]
async fn confirm_payment_marks_booking_paid() {
	let env = TestEnv::new().await;
	let booking_id = seed_booking(&env, "P-101", "bob@example.com").await;

	let token = env.login_user().await;

	let response = env
		.app
		.post("/api/payment/confirm")
		.authorization_bearer(&token)
		.json(&json!({
			"bookingId": booking_id,
			"paymentDetails": { "provider": "test", "last4": "4242" },
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<serde_json::Value>();
	assert_eq!(body["message"], "Payment confirmed successfully");
	assert_eq!(body["booking"]["paymentStatus"], "paid");

	// The confirmation lands in the audit trail as well
	let admin_token = env.login_admin().await;
	let response = env
		.app
		.get(&format!("/api/bookings/{booking_id}/activities"))
		.authorization_bearer(&admin_token)
		.await;

	let activities = response.json::<serde_json::Value>();
	let activities = activities.as_array().unwrap();
	assert_eq!(activities.len(), 2);
	assert_eq!(activities[1]["activity"], "Payment paid");
}

#[tokio::test(flavor = "multi_thread")]
async fn confirm_payment_requires_credential() {
	let env = TestEnv::new().await;
	let booking_id = seed_booking(&env, "P-101", "bob@example.com").await;

	let response = env
		.app
		.post("/api/payment/confirm")
		.json(&json!({ "bookingId": booking_id }))
		.await;

	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn confirm_payment_rejects_unknown_booking() {
	let env = TestEnv::new().await;
	let token = env.login_user().await;

	let response = env
		.app
		.post("/api/payment/confirm")
		.authorization_bearer(&token)
		.json(&json!({ "bookingId": 999 }))
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn my_billings_lists_only_paid_bookings() {
	let env = TestEnv::new().await;
	let paid = seed_booking(&env, "P-101", "bob@example.com").await;
	seed_booking(&env, "P-102", "bob@example.com").await;
	seed_booking(&env, "P-103", "jane@example.com").await;

	let token = env.login_user().await;

	let response = env
		.app
		.post("/api/payment/confirm")
		.authorization_bearer(&token)
		.json(&json!({ "bookingId": paid }))
		.await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = env
		.app
		.get("/api/payment/my-billings")
		.authorization_bearer(&token)
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let bookings = response.json::<serde_json::Value>();
	let bookings = bookings.as_array().unwrap();
	assert_eq!(bookings.len(), 1);
	assert_eq!(bookings[0]["id"], paid);
	assert_eq!(bookings[0]["paymentStatus"], "paid");
}
