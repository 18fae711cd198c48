// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::account::AccountStore;
use crate::db::Storage;
use crate::ledger::LedgerStore;
use crate::models::TxKind;
use crate::utils::{fmt_inr, pretty_table};

/// The dashboard stat cards: totals per kind plus the two derived
/// aggregates, all recomputed from the current records.
pub fn handle(storage: &Storage) -> Result<()> {
    let user = AccountStore::new(storage).require_session()?;
    let ledger = LedgerStore::load(storage)?;
    println!("Hi, {}", user.name);
    let rows = vec![
        vec!["Income".to_string(), fmt_inr(&ledger.total(TxKind::Income))],
        vec![
            "Expenses".to_string(),
            fmt_inr(&ledger.total(TxKind::Expenses)),
        ],
        vec![
            "Savings".to_string(),
            fmt_inr(&ledger.total(TxKind::Savings)),
        ],
        vec!["Loans".to_string(), fmt_inr(&ledger.total_loans())],
        vec!["Net worth".to_string(), fmt_inr(&ledger.net_worth())],
        vec![
            "Current balance".to_string(),
            fmt_inr(&ledger.current_balance()),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount"], rows));
    Ok(())
}
