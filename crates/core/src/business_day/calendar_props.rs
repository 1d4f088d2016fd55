//! Property tests for business day resolution.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use shiftgate_shared::types::EmployeeId;

use super::*;
use crate::testing::MockReportStore;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..86_400, 0u32..1_000_000).prop_map(|(secs, micros)| {
        NaiveTime::from_num_seconds_from_midnight_opt(secs, micros * 1000).unwrap()
    })
}

/// A client date for `date` in one of the shapes terminals send.
fn arb_pos_date(date: NaiveDate) -> impl Strategy<Value = String> {
    let padded = date.format("%Y-%m-%d").to_string();
    let unpadded = format!("{}-{}-{}", date.year(), date.month(), date.day());
    prop_oneof![
        Just(padded.clone()),
        Just(unpadded),
        (arb_time(), -14i32..=14).prop_map(move |(time, offset_hours)| {
            let offset = if offset_hours == 0 {
                "Z".to_string()
            } else {
                format!("{offset_hours:+03}:00")
            };
            format!("{padded}T{}{offset}", time.format("%H:%M:%S"))
        }),
    ]
}

proptest! {
    #[test]
    fn day_after_is_next_day_for_any_time(date in arb_date(), time in arb_time()) {
        let calendar = BusinessCalendar::default();
        let closed_at = Utc.from_utc_datetime(&date.and_time(time));

        prop_assert_eq!(calendar.day_after(closed_at), date + Duration::days(1));
    }

    #[test]
    fn first_day_keeps_client_date(
        (date, pos_date) in arb_date().prop_flat_map(|date| (Just(date), arb_pos_date(date))),
    ) {
        let store = Arc::new(MockReportStore::default());
        let calendar = BusinessCalendar::new(chrono_tz::America::New_York);
        let resolver = BusinessDayResolver::new(store, calendar);

        let resolved = block_on(resolver.resolve("S1", &pos_date)).unwrap();

        prop_assert_eq!(resolved.date.calendar_date(), Some(date));
        prop_assert_eq!(resolved.date.to_string(), pos_date);
    }

    #[test]
    fn initial_cash_iff_declaration_in_day(
        day in arb_date(),
        offset_days in -2i64..=2,
        time in arb_time(),
    ) {
        let store = Arc::new(MockReportStore::default());
        let employee_id = EmployeeId::new();
        let declared_on = day + Duration::days(offset_days);
        store.add_declaration(employee_id, Utc.from_utc_datetime(&declared_on.and_time(time)));
        let checker = InitialCashChecker::new(store, BusinessCalendar::default());

        let found =
            block_on(checker.has_initial_cash(employee_id, &BusinessDate::Calendar(day))).unwrap();

        prop_assert_eq!(found, offset_days == 0);
    }
}
