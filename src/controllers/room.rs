//! Controllers for the room catalog

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use validator::Validate;

use crate::identity::AdminIdentity;
use crate::models::{NewRoom, Room};
use crate::schemas::room::{
	CreateRoomRequest,
	RoomListQuery,
	RoomListResponse,
	RoomTypeSummaryResponse,
	UpdateRoomRequest,
};
use crate::{DbPool, Error};

#[instrument(skip(pool))]
pub(crate) async fn get_rooms(
	State(pool): State<DbPool>,
	Query(query): Query<RoomListQuery>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let (rooms, total_rooms) = Room::get_all(
		query.filters(),
		query.limit(),
		query.offset(),
		&conn,
	)
	.await?;

	Ok((StatusCode::OK, Json(RoomListResponse { rooms, total_rooms })))
}

#[instrument(skip(pool))]
pub(crate) async fn get_room_type_summary(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let summary = Room::type_summary(&conn).await?;

	Ok((StatusCode::OK, Json(RoomTypeSummaryResponse { summary })))
}

#[instrument(skip(pool))]
pub(crate) async fn get_room_by_type(
	State(pool): State<DbPool>,
	Path(room_type): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let room = Room::get_by_type(room_type, &conn).await?;

	Ok((StatusCode::OK, Json(room)))
}

#[instrument(skip(pool))]
pub(crate) async fn get_room(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let room = Room::get(id, &conn).await?;

	Ok((StatusCode::OK, Json(room)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn create_room(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Json(request): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let room = NewRoom::from(request).insert(&conn).await?;

	Ok((StatusCode::CREATED, Json(room)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn create_rooms_bulk(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Json(requests): Json<Vec<CreateRoomRequest>>,
) -> Result<impl IntoResponse, Error> {
	for request in &requests {
		request.validate()?;
	}

	let conn = pool.get().await?;

	let new_rooms = requests.into_iter().map(NewRoom::from).collect();
	let rooms = NewRoom::insert_bulk(new_rooms, &conn).await?;

	Ok((StatusCode::CREATED, Json(rooms)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn update_room(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
	Json(request): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let room = Room::update(id, request.into(), &conn).await?;

	Ok((StatusCode::OK, Json(room)))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn delete_room(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	Room::delete(id, &conn).await?;

	Ok((StatusCode::OK, Json(json!({ "message": "Room deleted" }))))
}

#[instrument(skip(pool, _admin))]
pub(crate) async fn delete_all_rooms(
	State(pool): State<DbPool>,
	_admin: AdminIdentity,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let deleted = Room::delete_all(&conn).await?;

	info!("deleted all {deleted} rooms");

	Ok((StatusCode::OK, Json(json!({ "message": "All rooms deleted" }))))
}
