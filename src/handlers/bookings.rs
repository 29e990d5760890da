use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UpdateResponse {
    ok: bool,
    updated: bool,
}

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.bookings.bookings())
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBooking>,
) -> (StatusCode, Json<Booking>) {
    let booking = state.bookings.add_booking(body);
    (StatusCode::CREATED, Json(booking))
}

// GET /api/bookings/upcoming
pub async fn get_upcoming(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.bookings.upcoming_bookings())
}

// GET /api/bookings/past
pub async fn get_past(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.bookings.past_bookings())
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    state
        .bookings
        .get_booking(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking '{id}'")))
}

// POST /api/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: BookingStatus,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Json<UpdateResponse> {
    let updated = state.bookings.update_booking_status(&id, body.status);
    Json(UpdateResponse { ok: true, updated })
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<UpdateResponse> {
    let updated = state.bookings.cancel_booking(&id);
    Json(UpdateResponse { ok: true, updated })
}

// POST /api/bookings/:id/complete
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<UpdateResponse> {
    let updated = state
        .bookings
        .update_booking_status(&id, BookingStatus::Completed);
    Json(UpdateResponse { ok: true, updated })
}
