use axum::http::StatusCode;

mod common;

use common::TestEnv;
use serde_json::json;

async fn create_room(
	env: &TestEnv,
	token: &str,
	room_number: &str,
	room_type: &str,
	price: f64,
) -> serde_json::Value {
	let response = env
		.app
		.post("/api/rooms")
		.authorization_bearer(token)
		.json(&json!({
			"roomNumber": room_number,
			"roomType": room_type,
			"price": price,
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);

	response.json::<serde_json::Value>()
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_creates_room() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "P-101", "Presidential", 500.0).await;

	assert_eq!(room["roomNumber"], "P-101");
	assert_eq!(room["roomType"], "Presidential");
	assert_eq!(room["price"], 500.0);
	assert_eq!(room["status"], "available");
	assert_eq!(room["capacity"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_room_rejects_duplicate_number() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	create_room(&env, &token, "P-101", "Presidential", 500.0).await;

	let response = env
		.app
		.post("/api/rooms")
		.authorization_bearer(&token)
		.json(&json!({
			"roomNumber": "P-101",
			"roomType": "Deluxe",
			"price": 250.0,
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_room_requires_admin() {
	let env = TestEnv::new().await;
	let token = env.login_user().await;

	let response = env
		.app
		.post("/api/rooms")
		.authorization_bearer(&token)
		.json(&json!({
			"roomNumber": "P-101",
			"roomType": "Presidential",
			"price": 500.0,
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_room_requires_credential() {
	let env = TestEnv::new().await;

	let response = env
		.app
		.post("/api/rooms")
		.json(&json!({
			"roomNumber": "P-101",
			"roomType": "Presidential",
			"price": 500.0,
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn bulk_create_rooms() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let response = env
		.app
		.post("/api/rooms/bulk")
		.authorization_bearer(&token)
		.json(&json!([
			{ "roomNumber": "D-201", "roomType": "Deluxe", "price": 250.0 },
			{ "roomNumber": "D-202", "roomType": "Deluxe", "price": 250.0 },
		]))
		.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);
	assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_rooms_paginates_and_filters() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	for i in 1..=10 {
		let room_type = if i <= 6 { "Deluxe" } else { "Standard" };
		create_room(&env, &token, &format!("R-{i:03}"), room_type, 100.0)
			.await;
	}

	let response = env.app.get("/api/rooms?page=1&limit=4").await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<serde_json::Value>();
	assert_eq!(body["rooms"].as_array().unwrap().len(), 4);
	assert_eq!(body["totalRooms"], 10);

	let response = env.app.get("/api/rooms?roomType=Deluxe&limit=20").await;
	let body = response.json::<serde_json::Value>();
	assert_eq!(body["rooms"].as_array().unwrap().len(), 6);
	assert_eq!(body["totalRooms"], 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_rooms_filters_on_availability() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "D-201", "Deluxe", 250.0).await;
	create_room(&env, &token, "D-202", "Deluxe", 250.0).await;

	let response = env
		.app
		.put(&format!("/api/rooms/{}", room["id"]))
		.authorization_bearer(&token)
		.json(&json!({ "status": "occupied" }))
		.await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = env.app.get("/api/rooms?availableOnly=true").await;
	let body = response.json::<serde_json::Value>();

	assert_eq!(body["totalRooms"], 1);
	assert_eq!(body["rooms"][0]["roomNumber"], "D-202");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_room_by_type_returns_first_match() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	create_room(&env, &token, "P-102", "Presidential", 500.0).await;
	create_room(&env, &token, "P-101", "Presidential", 500.0).await;
	create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	let response = env.app.get("/api/rooms/type/Presidential").await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let room = response.json::<serde_json::Value>();
	assert_eq!(room["roomNumber"], "P-101");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_room_by_unknown_type_not_found() {
	let env = TestEnv::new().await;

	let response = env.app.get("/api/rooms/type/Penthouse").await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn room_type_summary_counts_availability() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let mut presidential_ids = Vec::new();

	for i in 1..=6 {
		let room = create_room(
			&env,
			&token,
			&format!("P-10{i}"),
			"Presidential",
			500.0,
		)
		.await;

		presidential_ids.push(room["id"].as_i64().unwrap());
	}
	create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	// Mark two presidential rooms occupied
	for id in &presidential_ids[..2] {
		let response = env
			.app
			.put(&format!("/api/rooms/{id}"))
			.authorization_bearer(&token)
			.json(&json!({ "status": "occupied" }))
			.await;
		assert_eq!(response.status_code(), StatusCode::OK);
	}

	let response = env.app.get("/api/rooms/summary").await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<serde_json::Value>();
	let presidential = body["summary"]
		.as_array()
		.unwrap()
		.iter()
		.find(|entry| entry["type"] == "Presidential")
		.cloned()
		.unwrap();

	assert_eq!(presidential["total"], 6);
	assert_eq!(presidential["available"], 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn partial_update_leaves_other_fields() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	let response = env
		.app
		.put(&format!("/api/rooms/{}", room["id"]))
		.authorization_bearer(&token)
		.json(&json!({ "price": 300.0 }))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let updated = response.json::<serde_json::Value>();
	assert_eq!(updated["price"], 300.0);
	assert_eq!(updated["roomNumber"], "D-201");
	assert_eq!(updated["roomType"], "Deluxe");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_partial_update_leaves_room_unchanged() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	let response = env
		.app
		.put(&format!("/api/rooms/{}", room["id"]))
		.authorization_bearer(&token)
		.json(&json!({}))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let updated = response.json::<serde_json::Value>();
	assert_eq!(updated["roomNumber"], "D-201");
	assert_eq!(updated["price"], 250.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_room_not_found() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let response = env
		.app
		.put("/api/rooms/999")
		.authorization_bearer(&token)
		.json(&json!({ "price": 300.0 }))
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_room() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	let response = env
		.app
		.delete(&format!("/api/rooms/{}", room["id"]))
		.authorization_bearer(&token)
		.await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = env.app.get(&format!("/api/rooms/{}", room["id"])).await;
	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_room_with_bookings() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "P-101", "Presidential", 500.0).await;

	let response = env
		.app
		.post("/api/bookings")
		.json(&json!({
			"customerName": "John Smith",
			"customerEmail": "john@example.com",
			"customerPhone": "+32470000000",
			"roomId": room["id"],
			"checkIn": "2026-09-01",
			"checkOut": "2026-09-05",
			"numberOfGuests": 2,
		}))
		.await;
	assert_eq!(response.status_code(), StatusCode::CREATED);

	let response = env
		.app
		.delete(&format!("/api/rooms/{}", room["id"]))
		.authorization_bearer(&token)
		.await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = env.app.get(&format!("/api/rooms/{}", room["id"])).await;
	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_all_rooms() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	create_room(&env, &token, "D-201", "Deluxe", 250.0).await;
	create_room(&env, &token, "D-202", "Deluxe", 250.0).await;

	let response =
		env.app.delete("/api/rooms").authorization_bearer(&token).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let body = env.app.get("/api/rooms").await.json::<serde_json::Value>();
	assert_eq!(body["totalRooms"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_all_rooms_with_bookings() {
	let env = TestEnv::new().await;
	let token = env.login_admin().await;

	let room = create_room(&env, &token, "P-101", "Presidential", 500.0).await;
	create_room(&env, &token, "D-201", "Deluxe", 250.0).await;

	let response = env
		.app
		.post("/api/bookings")
		.json(&json!({
			"customerName": "John Smith",
			"customerEmail": "john@example.com",
			"customerPhone": "+32470000000",
			"roomId": room["id"],
			"checkIn": "2026-09-01",
			"checkOut": "2026-09-05",
			"numberOfGuests": 2,
		}))
		.await;
	assert_eq!(response.status_code(), StatusCode::CREATED);

	let response =
		env.app.delete("/api/rooms").authorization_bearer(&token).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let body = env.app.get("/api/rooms").await.json::<serde_json::Value>();
	assert_eq!(body["totalRooms"], 0);
}
