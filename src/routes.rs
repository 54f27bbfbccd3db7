use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::auth::{check_user, login, register};
use crate::controllers::billing::{
	create_billing,
	delete_billing,
	get_admin_billings,
	get_billing,
	get_booking_billings,
	get_customer_bill,
	get_my_billings,
	update_billing,
};
use crate::controllers::booking::{
	cancel_booking,
	create_booking,
	delete_cancelled_bookings,
	get_booking,
	get_booking_activities,
	get_bookings,
	get_my_bookings,
	update_booking_status,
	update_payment_status,
};
use crate::controllers::healthcheck;
use crate::controllers::payment::{confirm_payment, get_my_paid_billings};
use crate::controllers::review::{
	create_review,
	get_my_reviews,
	get_room_reviews,
};
use crate::controllers::room::{
	create_room,
	create_rooms_bulk,
	delete_all_rooms,
	delete_room,
	get_room,
	get_room_by_type,
	get_room_type_summary,
	get_rooms,
	update_room,
};
use crate::middleware::AuthLayer;

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let api_routes = Router::new()
		.nest("/auth", auth_routes())
		.nest("/rooms", room_routes(&state))
		.nest("/bookings", booking_routes(&state))
		.nest("/payment", payment_routes(&state))
		.nest("/billings", billing_routes(&state))
		.nest("/customer-bills", customer_bill_routes(&state))
		.nest("/reviews", review_routes(&state));

	Router::new()
		.route("/healthcheck", get(healthcheck))
		.nest("/api", api_routes)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::new(Duration::from_secs(10)))
				.layer(CompressionLayer::new())
				.layer(CorsLayer::permissive()),
		)
		.with_state(state)
}

/// Registration and login routes
fn auth_routes() -> Router<AppState> {
	Router::new()
		.route("/register", post(register))
		.route("/login", post(login))
		.route("/checkuser", get(check_user))
}

/// Room catalog routes with auth protection for write operations
fn room_routes(state: &AppState) -> Router<AppState> {
	let protected = Router::new()
		.route("/", post(create_room).delete(delete_all_rooms))
		.route("/bulk", post(create_rooms_bulk))
		.route("/{id}", put(update_room).delete(delete_room))
		.route_layer(AuthLayer::new(state.clone()));

	Router::new()
		.route("/", get(get_rooms))
		.route("/summary", get(get_room_type_summary))
		.route("/type/{room_type}", get(get_room_by_type))
		.route("/{id}", get(get_room))
		.route("/{id}/reviews", get(get_room_reviews))
		.merge(protected)
}

/// Booking routes
///
/// Creation is public; everything else needs a credential
fn booking_routes(state: &AppState) -> Router<AppState> {
	let protected = Router::new()
		.route("/", get(get_bookings))
		.route("/my-bookings", get(get_my_bookings))
		.route("/cancelled", delete(delete_cancelled_bookings))
		.route(
			"/{id}",
			get(get_booking)
				.put(update_booking_status)
				.delete(cancel_booking),
		)
		.route("/{id}/payment-status", put(update_payment_status))
		.route("/{id}/activities", get(get_booking_activities))
		.route_layer(AuthLayer::new(state.clone()));

	Router::new().route("/", post(create_booking)).merge(protected)
}

/// Payment confirmation routes
fn payment_routes(state: &AppState) -> Router<AppState> {
	Router::new()
		.route("/confirm", post(confirm_payment))
		.route("/my-billings", get(get_my_paid_billings))
		.route_layer(AuthLayer::new(state.clone()))
}

/// Billing record routes
fn billing_routes(state: &AppState) -> Router<AppState> {
	Router::new()
		.route("/", get(get_my_billings).post(create_billing))
		.route("/admin", get(get_admin_billings))
		.route("/booking/{booking_id}", get(get_booking_billings))
		.route(
			"/{id}",
			get(get_billing).put(update_billing).delete(delete_billing),
		)
		.route_layer(AuthLayer::new(state.clone()))
}

/// Admin invoice view routes
fn customer_bill_routes(state: &AppState) -> Router<AppState> {
	Router::new()
		.route("/{booking_id}", get(get_customer_bill))
		.route_layer(AuthLayer::new(state.clone()))
}

/// Review routes
fn review_routes(state: &AppState) -> Router<AppState> {
	Router::new()
		.route("/", post(create_review))
		.route("/my", get(get_my_reviews))
		.route_layer(AuthLayer::new(state.clone()))
}
