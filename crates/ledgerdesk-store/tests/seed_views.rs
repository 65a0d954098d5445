use chrono::NaiveDate;
use ledgerdesk_core::{FilterState, InvoiceStatus, PaymentStatus, SafeType, derive};
use ledgerdesk_store::seed;

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[test]
fn date_range_does_not_exclude_safes() {
    let safes = seed::safes();
    let filters = FilterState::<SafeType>::new().between(Some(day(6, 1)), Some(day(6, 2)));

    assert_eq!(derive(&safes, &filters), safes);
}

#[test]
fn currency_filter_does_not_exclude_base_currency_records() {
    let invoices = seed::purchase_invoices();
    let filters = FilterState::<InvoiceStatus>::new().with_currencies(["USD"]);
    assert_eq!(derive(&invoices, &filters), invoices);

    let payments = seed::incoming_payments();
    let filters = FilterState::<PaymentStatus>::new().with_currencies(["EUR"]);
    assert_eq!(derive(&payments, &filters), payments);
}

#[test]
fn missing_dimension_still_composes_with_present_ones() {
    let safes = seed::safes();
    let filters = FilterState::new()
        .with_statuses([SafeType::Bank])
        .between(Some(day(6, 1)), None);

    let out = derive(&safes, &filters);
    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|safe| safe.safe_type == SafeType::Bank));
}
