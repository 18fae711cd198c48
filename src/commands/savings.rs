// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::account::AccountStore;
use crate::commands::transactions::parse_sort;
use crate::db::Storage;
use crate::ledger::LedgerStore;
use crate::models::{SavingsMode, TxKind};
use crate::utils::{fmt_inr, parse_amount, parse_date, pretty_table, today};

pub fn handle(storage: &Storage, m: &clap::ArgMatches) -> Result<()> {
    AccountStore::new(storage).require_session()?;
    match m.subcommand() {
        Some(("add", sub)) => add(storage, sub)?,
        Some(("list", sub)) => list(storage, sub)?,
        Some(("rm", sub)) => rm(storage, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let magnitude = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let mode_arg = sub.get_one::<String>("mode").unwrap();
    let mode = SavingsMode::parse(mode_arg)
        .ok_or_else(|| anyhow::anyhow!("Unknown mode '{}', expected add or minus", mode_arg))?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let mut ledger = LedgerStore::load(storage)?;
    ledger.add_saving(date, magnitude, mode, note)?;
    println!(
        "Recorded savings adjustment on {} (total: {})",
        date,
        fmt_inr(&ledger.total(TxKind::Savings))
    );
    Ok(())
}

fn list(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let sort = parse_sort(sub)?;
    let ledger = LedgerStore::load(storage)?;
    let rows: Vec<Vec<String>> = ledger
        .list_transactions(TxKind::Savings, sort)
        .into_iter()
        .map(|row| {
            vec![
                row.index.to_string(),
                row.record.date.to_string(),
                fmt_inr(&row.record.price),
                row.record.description.unwrap_or_default(),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No records yet.");
    } else {
        println!("{}", pretty_table(&["#", "Date", "Amount", "Note"], rows));
    }
    println!(
        "Total savings: {}",
        fmt_inr(&ledger.total(TxKind::Savings))
    );
    Ok(())
}

fn rm(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let mut ledger = LedgerStore::load(storage)?;
    ledger.delete_transaction(TxKind::Savings, index)?;
    println!(
        "Deleted savings #{} (total: {})",
        index,
        fmt_inr(&ledger.total(TxKind::Savings))
    );
    Ok(())
}
