//! Booking statistics and listing
//!
//! Pure functions over a booking snapshot. Nothing here keeps state between
//! calls or touches the input; every view is recomputed from scratch.

use std::cmp::Reverse;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use crate::models::Booking;
use crate::utils::helpers::{date_matches_day, parse_booking_date};

/// Aggregate counters shown at the top of the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_active: usize,
    pub total_revenue: u64,
    pub today_count: usize,
    pub today_revenue: u64,
}

/// Compute dashboard counters for the current local day
pub fn compute_stats(bookings: &[Booking]) -> DashboardStats {
    compute_stats_on(bookings, Local::now().date_naive())
}

/// Compute dashboard counters with `today` as the reference day
pub fn compute_stats_on(bookings: &[Booking], today: NaiveDate) -> DashboardStats {
    bookings
        .iter()
        .filter(|booking| booking.is_active())
        .fold(DashboardStats::default(), |mut stats, booking| {
            stats.total_active += 1;
            stats.total_revenue = stats.total_revenue.saturating_add(booking.amount());

            if date_matches_day(&booking.date, today) {
                stats.today_count += 1;
                stats.today_revenue = stats.today_revenue.saturating_add(booking.amount());
            }

            stats
        })
}

/// Confirmed bookings, newest date first
///
/// The sort is stable, so bookings on the same date keep their input order.
/// Dates that cannot be parsed go last.
pub fn list_confirmed_sorted_by_date_desc(bookings: &[Booking]) -> Vec<&Booking> {
    let mut confirmed: Vec<&Booking> = bookings.iter().filter(|booking| booking.is_active()).collect();
    confirmed.sort_by_cached_key(|booking| Reverse(parse_booking_date(&booking.date)));
    confirmed
}
