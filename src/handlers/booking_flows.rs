use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking_flows;
use crate::state::AppState;

fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

// POST /api/book/car-wash
#[derive(Deserialize)]
pub struct CarWashRequest {
    pub package_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

pub async fn book_car_wash(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CarWashRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let request = booking_flows::car_wash_booking(&body.package_id, &body.date, &body.time)?;
    let booking = state.bookings.add_booking(request);
    Ok((StatusCode::CREATED, Json(booking)))
}

// POST /api/book/exterior-detailing
#[derive(Deserialize)]
pub struct ExteriorDetailingRequest {
    pub package_id: String,
}

pub async fn book_exterior_detailing(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ExteriorDetailingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let request = booking_flows::exterior_detailing_booking(
        &body.package_id,
        local_now(),
        state.config.booking_lead_minutes,
    )?;
    let booking = state.bookings.add_booking(request);
    Ok((StatusCode::CREATED, Json(booking)))
}

// POST /api/book/interior-cleaning
#[derive(Deserialize)]
pub struct InteriorCleaningRequest {
    #[serde(default)]
    pub service_ids: Vec<String>,
}

pub async fn book_interior_cleaning(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InteriorCleaningRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let request = booking_flows::interior_cleaning_booking(
        &body.service_ids,
        local_now(),
        state.config.booking_lead_minutes,
    )?;
    let booking = state.bookings.add_booking(request);
    Ok((StatusCode::CREATED, Json(booking)))
}
