use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{date_priority, Booking, BookingStatus, NewBooking};

#[derive(Default)]
struct Records {
    bookings: Vec<Booking>,
    last_created_at: Option<DateTime<Utc>>,
}

/// In-memory registry of bookings for the lifetime of the process.
///
/// Records are never removed; completed and cancelled bookings stay as
/// history. The upcoming and past views are recomputed on every call.
#[derive(Default)]
pub struct BookingStore {
    records: Mutex<Records>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        // Every mutation leaves the vector consistent, so a poisoned lock is still usable.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_booking(&self, request: NewBooking) -> Booking {
        let id = format!("booking_{}", Uuid::new_v4().simple());

        let booking = {
            let mut records = self.lock();

            // created_at is the tie-break for both views and must follow creation order
            let now = Utc::now();
            let created_at = match records.last_created_at {
                Some(last) if now <= last => last + Duration::microseconds(1),
                _ => now,
            };
            records.last_created_at = Some(created_at);

            let booking = request.into_booking(id, created_at);
            records.bookings.push(booking.clone());
            booking
        };

        tracing::info!(
            booking_id = %booking.id,
            service = %booking.service,
            date = %booking.date,
            time = %booking.time,
            "booking created"
        );

        booking
    }

    /// Sets the status of the booking with `id`. Unknown ids are ignored;
    /// the return value only reports whether a record matched.
    pub fn update_booking_status(&self, id: &str, status: BookingStatus) -> bool {
        let previous = {
            let mut records = self.lock();
            records
                .bookings
                .iter_mut()
                .find(|b| b.id == id)
                .map(|booking| std::mem::replace(&mut booking.status, status))
        };

        match previous {
            Some(previous) => {
                tracing::info!(
                    booking_id = %id,
                    from = previous.as_str(),
                    to = status.as_str(),
                    "booking status updated"
                );
                true
            }
            None => {
                tracing::warn!(booking_id = %id, status = status.as_str(), "status update for unknown booking ignored");
                false
            }
        }
    }

    pub fn cancel_booking(&self, id: &str) -> bool {
        self.update_booking_status(id, BookingStatus::Cancelled)
    }

    /// Confirmed bookings, soonest date first, then in creation order.
    pub fn upcoming_bookings(&self) -> Vec<Booking> {
        let mut upcoming: Vec<Booking> = self
            .lock()
            .bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .cloned()
            .collect();

        upcoming.sort_by(|a, b| {
            date_priority(&a.date)
                .cmp(&date_priority(&b.date))
                .then(a.created_at.cmp(&b.created_at))
        });

        tracing::debug!(count = upcoming.len(), "listed upcoming bookings");
        upcoming
    }

    /// Completed and cancelled bookings, most recently created first.
    pub fn past_bookings(&self) -> Vec<Booking> {
        let mut past: Vec<Booking> = self
            .lock()
            .bookings
            .iter()
            .filter(|b| b.status.is_past())
            .cloned()
            .collect();

        past.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = past.len(), "listed past bookings");
        past
    }

    /// Every booking in insertion order.
    pub fn bookings(&self) -> Vec<Booking> {
        self.lock().bookings.clone()
    }

    pub fn get_booking(&self, id: &str) -> Option<Booking> {
        self.lock().bookings.iter().find(|b| b.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn request(service: &str, date: &str, status: BookingStatus) -> NewBooking {
        NewBooking {
            service: service.to_string(),
            date: date.to_string(),
            time: "9:00 AM".to_string(),
            price: "₹299".to_string(),
            status,
            icon: "water".to_string(),
            package_name: None,
            services: None,
        }
    }

    fn confirmed(service: &str, date: &str) -> NewBooking {
        request(service, date, BookingStatus::Confirmed)
    }

    fn ids(bookings: &[Booking]) -> Vec<String> {
        bookings.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookingStore::new();
        assert!(store.is_empty());
        assert!(store.upcoming_bookings().is_empty());
        assert!(store.past_bookings().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = BookingStore::new();
        let created: Vec<Booking> = (0..200)
            .map(|i| store.add_booking(confirmed(&format!("Wash {i}"), "Today")))
            .collect();

        let unique: HashSet<&str> = created.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(unique.len(), 200);
        assert!(created.iter().all(|b| b.id.starts_with("booking_")));
    }

    #[test]
    fn test_created_at_strictly_increases() {
        let store = BookingStore::new();
        for _ in 0..50 {
            store.add_booking(confirmed("Basic Wash", "Today"));
        }
        let all = store.bookings();
        for pair in all.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }

    #[test]
    fn test_add_keeps_request_fields() {
        let store = BookingStore::new();
        let mut req = confirmed("Interior Cleaning", "Today");
        req.services = Some(vec!["Deep Vacuum".to_string(), "Seat Cleaning".to_string()]);
        let booking = store.add_booking(req);

        let stored = store.get_booking(&booking.id).unwrap();
        assert_eq!(stored, booking);
        assert_eq!(stored.service, "Interior Cleaning");
        assert_eq!(stored.services.as_ref().map(Vec::len), Some(2));
        assert_eq!(stored.package_name, None);
    }

    #[test]
    fn test_record_count_never_decreases() {
        let store = BookingStore::new();
        let a = store.add_booking(confirmed("Basic Wash", "Today"));
        let b = store.add_booking(confirmed("Premium Wash", "Tomorrow"));
        assert_eq!(store.len(), 2);

        store.cancel_booking(&a.id);
        store.update_booking_status(&b.id, BookingStatus::Completed);
        store.cancel_booking(&b.id);
        store.cancel_booking("missing");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = BookingStore::new();
        store.add_booking(confirmed("Basic Wash", "Today"));
        store.add_booking(confirmed("Deluxe Wash", "Day After"));
        let before = store.bookings();

        assert!(!store.update_booking_status("nonexistent", BookingStatus::Completed));
        assert_eq!(store.bookings(), before);
    }

    #[test]
    fn test_update_is_idempotent() {
        let store = BookingStore::new();
        let booking = store.add_booking(confirmed("Basic Wash", "Today"));

        assert!(store.update_booking_status(&booking.id, BookingStatus::Completed));
        let once = store.bookings();
        assert!(store.update_booking_status(&booking.id, BookingStatus::Completed));
        assert_eq!(store.bookings(), once);
    }

    #[test]
    fn test_update_only_touches_status() {
        let store = BookingStore::new();
        let booking = store.add_booking(confirmed("Basic Wash", "Tomorrow"));
        store.update_booking_status(&booking.id, BookingStatus::Completed);

        let stored = store.get_booking(&booking.id).unwrap();
        assert_eq!(stored.status, BookingStatus::Completed);
        assert_eq!(
            Booking {
                status: BookingStatus::Confirmed,
                ..stored
            },
            booking
        );
    }

    #[test]
    fn test_transitions_are_unconstrained() {
        let store = BookingStore::new();
        let booking = store.add_booking(confirmed("Basic Wash", "Today"));

        store.cancel_booking(&booking.id);
        assert!(store.upcoming_bookings().is_empty());

        store.update_booking_status(&booking.id, BookingStatus::Confirmed);
        assert_eq!(ids(&store.upcoming_bookings()), vec![booking.id]);
    }

    #[test]
    fn test_views_partition_by_status() {
        let store = BookingStore::new();
        let a = store.add_booking(confirmed("A", "Today"));
        let b = store.add_booking(confirmed("B", "Tomorrow"));
        let c = store.add_booking(confirmed("C", "Someday"));
        let d = store.add_booking(request("D", "Today", BookingStatus::Completed));
        store.cancel_booking(&b.id);

        let upcoming: HashSet<String> = ids(&store.upcoming_bookings()).into_iter().collect();
        let past: HashSet<String> = ids(&store.past_bookings()).into_iter().collect();

        assert!(upcoming.is_disjoint(&past));
        for booking in store.bookings() {
            assert_eq!(
                upcoming.contains(&booking.id),
                booking.status == BookingStatus::Confirmed
            );
            assert_eq!(past.contains(&booking.id), booking.status.is_past());
        }
        assert!(upcoming.contains(&a.id) && upcoming.contains(&c.id));
        assert!(past.contains(&b.id) && past.contains(&d.id));
    }

    #[test]
    fn test_upcoming_sorted_by_date_then_creation() {
        let store = BookingStore::new();
        let day_after = store.add_booking(confirmed("1", "Day After"));
        let today_first = store.add_booking(confirmed("2", "Today"));
        let tomorrow = store.add_booking(confirmed("3", "Tomorrow"));
        let today_second = store.add_booking(confirmed("4", "Today"));

        assert_eq!(
            ids(&store.upcoming_bookings()),
            vec![today_first.id, today_second.id, tomorrow.id, day_after.id]
        );
    }

    #[test]
    fn test_unrecognized_date_sorts_last() {
        let store = BookingStore::new();
        let custom = store.add_booking(confirmed("Custom", "2025-07-01"));
        let later = store.add_booking(confirmed("Later", "Day After"));
        let other_custom = store.add_booking(confirmed("Other", "Next Monday"));

        assert_eq!(
            ids(&store.upcoming_bookings()),
            vec![later.id, custom.id, other_custom.id]
        );
    }

    #[test]
    fn test_past_sorted_newest_first() {
        let store = BookingStore::new();
        let t1 = store.add_booking(confirmed("1", "Today"));
        let t2 = store.add_booking(confirmed("2", "Tomorrow"));
        let t3 = store.add_booking(confirmed("3", "Today"));

        store.cancel_booking(&t2.id);
        store.update_booking_status(&t1.id, BookingStatus::Completed);
        store.cancel_booking(&t3.id);

        assert_eq!(ids(&store.past_bookings()), vec![t3.id, t2.id, t1.id]);
    }

    #[test]
    fn test_views_are_snapshots() {
        let store = BookingStore::new();
        let booking = store.add_booking(confirmed("Basic Wash", "Today"));
        let upcoming = store.upcoming_bookings();

        store.cancel_booking(&booking.id);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].status, BookingStatus::Confirmed);
        assert!(store.upcoming_bookings().is_empty());
    }

    #[test]
    fn test_single_booking_then_cancel() {
        let store = BookingStore::new();
        let booking = store.add_booking(NewBooking {
            service: "Basic Wash".to_string(),
            date: "Today".to_string(),
            time: "9:00 AM".to_string(),
            price: "₹299".to_string(),
            status: BookingStatus::Confirmed,
            icon: "water".to_string(),
            package_name: None,
            services: None,
        });

        assert_eq!(store.len(), 1);
        assert_eq!(store.upcoming_bookings(), vec![booking.clone()]);
        assert!(store.past_bookings().is_empty());

        assert!(store.cancel_booking(&booking.id));
        assert!(store.upcoming_bookings().is_empty());
        let past = store.past_bookings();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, booking.id);
        assert_eq!(past[0].status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_concurrent_adds() {
        let store = std::sync::Arc::new(BookingStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store.add_booking(confirmed(&format!("{t}-{i}"), "Today"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let all = store.bookings();
        assert_eq!(all.len(), 200);
        for pair in all.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }
}
