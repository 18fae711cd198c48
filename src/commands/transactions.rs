// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::account::AccountStore;
use crate::db::Storage;
use crate::ledger::LedgerStore;
use crate::models::{SortKey, TxKind};
use crate::utils::{fmt_inr, parse_amount, parse_date, pretty_table, today};

/// Serves both the `income` and `expense` subcommands; the operations are
/// uniform across kinds.
pub fn handle(storage: &Storage, kind: TxKind, m: &clap::ArgMatches) -> Result<()> {
    AccountStore::new(storage).require_session()?;
    match m.subcommand() {
        Some(("add", sub)) => add(storage, kind, sub)?,
        Some(("list", sub)) => list(storage, kind, sub)?,
        Some(("rm", sub)) => rm(storage, kind, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(storage: &Storage, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let category = sub.get_one::<String>("category").map(|s| s.to_string());
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    // A category outside the kind's set is accepted as-is; records keep
    // their original category string regardless of the set's contents.
    let mut ledger = LedgerStore::load(storage)?;
    ledger.add_transaction(kind, date, amount, category, note)?;
    println!(
        "Recorded {} {} on {} (total: {})",
        kind.as_str(),
        fmt_inr(&amount),
        date,
        fmt_inr(&ledger.total(kind))
    );
    Ok(())
}

pub fn parse_sort(sub: &clap::ArgMatches) -> Result<Option<SortKey>> {
    match sub.get_one::<String>("sort") {
        Some(s) => SortKey::parse(s)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("Unknown sort key '{}'", s)),
        None => Ok(None),
    }
}

fn list(storage: &Storage, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let sort = parse_sort(sub)?;
    let ledger = LedgerStore::load(storage)?;
    let rows: Vec<Vec<String>> = ledger
        .list_transactions(kind, sort)
        .into_iter()
        .map(|row| {
            vec![
                row.index.to_string(),
                row.record.date.to_string(),
                row.record.category.unwrap_or_else(|| "-".to_string()),
                fmt_inr(&row.record.price),
                row.record.description.unwrap_or_default(),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No records yet.");
    } else {
        println!(
            "{}",
            pretty_table(&["#", "Date", "Category", "Amount", "Note"], rows)
        );
    }
    println!("Total {}: {}", kind.as_str(), fmt_inr(&ledger.total(kind)));
    Ok(())
}

fn rm(storage: &Storage, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let mut ledger = LedgerStore::load(storage)?;
    ledger.delete_transaction(kind, index)?;
    println!(
        "Deleted {} #{} (total: {})",
        kind.as_str(),
        index,
        fmt_inr(&ledger.total(kind))
    );
    Ok(())
}
