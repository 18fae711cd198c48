// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::db::Storage;
use billfold::ledger::LedgerStore;
use billfold::models::{LoanFilter, LoanType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup() -> Storage {
    Storage::open_in_memory().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seed_two(ledger: &mut LedgerStore<'_>) {
    ledger
        .add_loan(
            LoanType::Given,
            "Alice".to_string(),
            date("2024-02-01"),
            dec("200"),
            false,
            None,
        )
        .unwrap();
    ledger
        .add_loan(
            LoanType::Taken,
            "Bob".to_string(),
            date("2024-02-02"),
            dec("75"),
            true,
            None,
        )
        .unwrap();
}

#[test]
fn settled_filter_carries_original_index() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    seed_two(&mut ledger);

    let settled = ledger.filter_loans(LoanFilter::Settled);
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].record.person, "Bob");
    assert_eq!(settled[0].index, 1);

    // given and taken both count positively toward the total
    assert_eq!(ledger.total_loans(), dec("275"));
}

#[test]
fn type_filters_preserve_underlying_order() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    seed_two(&mut ledger);
    ledger
        .add_loan(
            LoanType::Given,
            "Chitra".to_string(),
            date("2024-01-15"),
            dec("10"),
            false,
            None,
        )
        .unwrap();

    let given = ledger.filter_loans(LoanFilter::Given);
    assert_eq!(given.len(), 2);
    assert_eq!(given[0].record.person, "Alice");
    assert_eq!(given[1].record.person, "Chitra");
    assert_eq!(given[1].index, 2);

    assert_eq!(ledger.filter_loans(LoanFilter::All).len(), 3);
    assert_eq!(ledger.filter_loans(LoanFilter::Unsettled).len(), 2);
}

#[test]
fn toggle_through_filtered_index_hits_right_record() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    seed_two(&mut ledger);

    let unsettled = ledger.filter_loans(LoanFilter::Unsettled);
    assert_eq!(unsettled[0].record.person, "Alice");
    ledger.toggle_loan_settled(unsettled[0].index, true).unwrap();

    assert!(ledger.filter_loans(LoanFilter::Unsettled).is_empty());
    let reloaded = LedgerStore::load(&storage).unwrap();
    assert_eq!(reloaded.filter_loans(LoanFilter::Settled).len(), 2);
}

#[test]
fn toggle_out_of_bounds_is_noop() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    seed_two(&mut ledger);
    ledger.toggle_loan_settled(9, true).unwrap();
    assert_eq!(ledger.filter_loans(LoanFilter::Settled).len(), 1);
}

#[test]
fn loan_price_is_abs_coerced() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    ledger
        .add_loan(
            LoanType::Taken,
            "Dev".to_string(),
            date("2024-03-01"),
            dec("-120"),
            false,
            None,
        )
        .unwrap();
    assert_eq!(ledger.total_loans(), dec("120"));
}

#[test]
fn delete_loan_by_true_index() {
    let storage = setup();
    let mut ledger = LedgerStore::load(&storage).unwrap();
    seed_two(&mut ledger);

    ledger.delete_loan(0).unwrap();
    let all = ledger.filter_loans(LoanFilter::All);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].record.person, "Bob");
    assert_eq!(all[0].index, 0);

    // out of bounds after the shrink: no-op
    ledger.delete_loan(5).unwrap();
    assert_eq!(ledger.filter_loans(LoanFilter::All).len(), 1);
}
