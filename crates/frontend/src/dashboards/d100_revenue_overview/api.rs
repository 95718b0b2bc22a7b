//! Mock data layer for the revenue overview.
//!
//! There is no backend: every "request" waits for a configured delay and
//! then generates data locally. Each call carries a [`LoadTicket`]; if a
//! newer request started while this one was waiting, nothing is generated
//! and `None` is returned.

use chrono::{NaiveDate, Utc};
use contracts::dashboards::d100_revenue_overview::{
    FilterState, RevenueSeriesRequest, RevenueSeriesResponse,
};
use contracts::enums::TimeRange;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::generator;
use crate::shared::load_guard::LoadTicket;

/// Получить ряд выручки для графика
pub async fn load_revenue_series(
    time_range: TimeRange,
    filters: FilterState,
    ticket: LoadTicket,
    delay_ms: u32,
) -> Option<RevenueSeriesResponse> {
    TimeoutFuture::new(delay_ms).await;

    let mut rng = StdRng::seed_from_u64(seed_for(&ticket));
    finish_load(time_range, filters, &ticket, today(), &mut rng)
}

/// Post-delay step of a load: generate only if the ticket is still current
pub fn finish_load<R: Rng + ?Sized>(
    time_range: TimeRange,
    filters: FilterState,
    ticket: &LoadTicket,
    anchor: NaiveDate,
    rng: &mut R,
) -> Option<RevenueSeriesResponse> {
    if !ticket.is_current() {
        log::debug!("revenue series load #{} superseded", ticket.generation());
        return None;
    }

    let request = RevenueSeriesRequest {
        time_range,
        filters,
        anchor,
    };
    Some(generator::build_response(&request, rng))
}

/// Simulated round-trip of the filter bar's apply/clear
pub async fn settle_filters(
    filters: FilterState,
    ticket: LoadTicket,
    delay_ms: u32,
) -> Option<FilterState> {
    TimeoutFuture::new(delay_ms).await;

    if ticket.is_current() {
        Some(filters)
    } else {
        log::debug!("filter change #{} superseded", ticket.generation());
        None
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Wall clock mixed with the ticket so two loads in one millisecond differ
fn seed_for(ticket: &LoadTicket) -> u64 {
    (js_sys::Date::now() as u64) ^ ticket.generation().rotate_left(32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::load_guard::RequestGeneration;
    use contracts::enums::{ProductCategory, Region};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_current_ticket_produces_series() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        let mut rng = StdRng::seed_from_u64(11);

        let response = finish_load(
            TimeRange::Week,
            FilterState::default(),
            &ticket,
            anchor(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(response.time_range, TimeRange::Week);
        assert_eq!(response.buckets.len(), 7);
    }

    #[test]
    fn test_superseded_ticket_generates_nothing() {
        let generation = RequestGeneration::new();
        let stale = generation.begin();
        let _fresh = generation.begin();

        let mut rng = StdRng::seed_from_u64(11);
        let filters = FilterState::new(None, Region::Europe, ProductCategory::Home);
        assert!(finish_load(TimeRange::Year, filters, &stale, anchor(), &mut rng).is_none());

        // rng untouched: the next draw matches a fresh generator with the same seed
        let mut untouched = StdRng::seed_from_u64(11);
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_invalidated_ticket_generates_nothing() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();

        let mut rng = StdRng::seed_from_u64(5);
        assert!(finish_load(
            TimeRange::Month,
            FilterState::default(),
            &ticket,
            anchor(),
            &mut rng
        )
        .is_none());
    }
}
