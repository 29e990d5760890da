//! Turns a customer's selection on one of the booking screens into a
//! [`NewBooking`] ready for the store.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::errors::AppError;
use crate::models::{BookingStatus, NewBooking};
use crate::services::catalog::{
    find_detailing_package, find_interior_service, find_wash_package, INTERIOR_SERVICES,
};

const INTERIOR_SERVICE_NAME: &str = "Interior Cleaning";

/// Car wash: the customer picks a package, a date and a time slot.
pub fn car_wash_booking(package_id: &str, date: &str, time: &str) -> Result<NewBooking, AppError> {
    let package = find_wash_package(package_id)
        .ok_or_else(|| AppError::NotFound(format!("car wash package '{package_id}'")))?;

    let date = date.trim();
    let time = time.trim();
    if date.is_empty() || time.is_empty() {
        return Err(AppError::Validation(
            "date and time are required".to_string(),
        ));
    }

    Ok(NewBooking {
        service: package.name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        price: package.price.to_string(),
        status: BookingStatus::Confirmed,
        icon: "water".to_string(),
        package_name: Some(package.name.to_string()),
        services: None,
    })
}

/// Exterior detailing is always booked for today at the next available time.
pub fn exterior_detailing_booking(
    package_id: &str,
    now: NaiveDateTime,
    lead_minutes: i64,
) -> Result<NewBooking, AppError> {
    let package = find_detailing_package(package_id)
        .ok_or_else(|| AppError::NotFound(format!("detailing package '{package_id}'")))?;

    Ok(NewBooking {
        service: package.name.to_string(),
        date: "Today".to_string(),
        time: next_available_time(now, lead_minutes)?,
        price: package.price.to_string(),
        status: BookingStatus::Confirmed,
        icon: "sparkles".to_string(),
        package_name: Some(package.name.to_string()),
        services: None,
    })
}

/// Interior cleaning is priced à la carte from the selected services.
/// Selections keep catalog order; repeated ids count once.
pub fn interior_cleaning_booking(
    service_ids: &[String],
    now: NaiveDateTime,
    lead_minutes: i64,
) -> Result<NewBooking, AppError> {
    if service_ids.is_empty() {
        return Err(AppError::Validation(
            "select at least one service".to_string(),
        ));
    }

    if let Some(unknown) = service_ids
        .iter()
        .find(|id| find_interior_service(id).is_none())
    {
        return Err(AppError::NotFound(format!("interior service '{unknown}'")));
    }

    let selected: Vec<_> = INTERIOR_SERVICES
        .iter()
        .filter(|s| service_ids.iter().any(|id| id == s.id))
        .collect();

    let mut total: u64 = 0;
    for service in &selected {
        let price = parse_price(service.price).ok_or_else(|| {
            AppError::Validation(format!("unreadable price for '{}'", service.id))
        })?;
        total += price;
    }

    Ok(NewBooking {
        service: INTERIOR_SERVICE_NAME.to_string(),
        date: "Today".to_string(),
        time: next_available_time(now, lead_minutes)?,
        price: format_inr(total),
        status: BookingStatus::Confirmed,
        icon: "car-sport".to_string(),
        package_name: None,
        services: Some(selected.iter().map(|s| s.name.to_string()).collect()),
    })
}

/// `"₹1,499"` → `1499`.
pub fn parse_price(price: &str) -> Option<u64> {
    let digits: String = price
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.trim().parse().ok()
}

/// Rupee amount with Indian digit grouping: `123456` → `"₹1,23,456"`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{tail}", groups.join(","))
}

pub fn format_display_time(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{hour}:{:02} {}",
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}

pub fn next_available_time(now: NaiveDateTime, lead_minutes: i64) -> Result<String, AppError> {
    let at = Duration::try_minutes(lead_minutes)
        .and_then(|lead| now.checked_add_signed(lead))
        .ok_or_else(|| {
            AppError::Validation(format!("lead time of {lead_minutes} minutes is out of range"))
        })?;
    Ok(format_display_time(at.time()))
}
