// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::account::AccountStore;
use billfold::db::Storage;
use billfold::ledger::LedgerStore;
use billfold::models::{LoanFilter, TxKind};
use billfold::{cli, commands};
use rust_decimal::Decimal;

fn setup_logged_in() -> Storage {
    let storage = Storage::open_in_memory().unwrap();
    let accounts = AccountStore::new(&storage);
    accounts.register("Asha", "asha@example.com", "pw").unwrap();
    accounts.set_session(false).unwrap();
    storage
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn expense_add_through_cli() {
    let storage = setup_logged_in();
    let matches = cli::build_cli().get_matches_from([
        "billfold", "expense", "add", "--amount", "100", "--date", "2024-01-05", "--category",
        "Food",
    ]);
    if let Some(("expense", sub)) = matches.subcommand() {
        commands::transactions::handle(&storage, TxKind::Expenses, sub).unwrap();
    } else {
        panic!("no expense subcommand");
    }

    let ledger = LedgerStore::load(&storage).unwrap();
    assert_eq!(ledger.total(TxKind::Expenses), dec("100"));
    let rows = ledger.list_transactions(TxKind::Expenses, None);
    assert_eq!(rows[0].record.category.as_deref(), Some("Food"));
}

#[test]
fn ledger_commands_require_session() {
    let storage = Storage::open_in_memory().unwrap();
    let matches =
        cli::build_cli().get_matches_from(["billfold", "expense", "add", "--amount", "10"]);
    if let Some(("expense", sub)) = matches.subcommand() {
        let err = commands::transactions::handle(&storage, TxKind::Expenses, sub).unwrap_err();
        assert!(err.to_string().contains("Not logged in"));
    } else {
        panic!("no expense subcommand");
    }
}

#[test]
fn savings_minus_mode_through_cli() {
    let storage = setup_logged_in();
    let matches = cli::build_cli().get_matches_from([
        "billfold", "savings", "add", "--amount", "500", "--mode", "minus", "--date",
        "2024-02-01",
    ]);
    if let Some(("savings", sub)) = matches.subcommand() {
        commands::savings::handle(&storage, sub).unwrap();
    } else {
        panic!("no savings subcommand");
    }

    let ledger = LedgerStore::load(&storage).unwrap();
    assert_eq!(ledger.total(TxKind::Savings), dec("-500"));
}

#[test]
fn loan_settle_through_cli() {
    let storage = setup_logged_in();
    let add = cli::build_cli().get_matches_from([
        "billfold", "loan", "add", "--type", "taken", "--person", "Bob", "--amount", "75",
        "--date", "2024-02-02",
    ]);
    if let Some(("loan", sub)) = add.subcommand() {
        commands::loans::handle(&storage, sub).unwrap();
    } else {
        panic!("no loan subcommand");
    }

    let settle =
        cli::build_cli().get_matches_from(["billfold", "loan", "settle", "--index", "0"]);
    if let Some(("loan", sub)) = settle.subcommand() {
        commands::loans::handle(&storage, sub).unwrap();
    } else {
        panic!("no loan subcommand");
    }

    let ledger = LedgerStore::load(&storage).unwrap();
    assert_eq!(ledger.filter_loans(LoanFilter::Settled).len(), 1);
}

#[test]
fn category_add_through_cli_is_idempotent() {
    let storage = setup_logged_in();
    for _ in 0..2 {
        let matches = cli::build_cli().get_matches_from([
            "billfold", "category", "add", "--kind", "expense", "--name", "Rent",
        ]);
        if let Some(("category", sub)) = matches.subcommand() {
            commands::categories::handle(&storage, sub).unwrap();
        } else {
            panic!("no category subcommand");
        }
    }

    let ledger = LedgerStore::load(&storage).unwrap();
    assert_eq!(
        ledger.categories(TxKind::Expenses),
        ["Food", "Transport", "Shopping", "Rent"]
    );
}
