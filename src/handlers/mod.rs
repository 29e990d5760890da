pub mod booking_flows;
pub mod bookings;
pub mod catalog;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/catalog", get(catalog::get_catalog))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/bookings/upcoming", get(bookings::get_upcoming))
        .route("/api/bookings/past", get(bookings::get_past))
        .route("/api/bookings/:id", get(bookings::get_booking))
        .route("/api/bookings/:id/status", post(bookings::update_status))
        .route("/api/bookings/:id/cancel", post(bookings::cancel_booking))
        .route("/api/bookings/:id/complete", post(bookings::complete_booking))
        .route("/api/book/car-wash", post(booking_flows::book_car_wash))
        .route(
            "/api/book/exterior-detailing",
            post(booking_flows::book_exterior_detailing),
        )
        .route(
            "/api/book/interior-cleaning",
            post(booking_flows::book_interior_cleaning),
        )
        .with_state(state)
}
