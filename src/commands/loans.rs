// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::account::AccountStore;
use crate::db::Storage;
use crate::ledger::LedgerStore;
use crate::models::{LoanFilter, LoanType};
use crate::utils::{fmt_inr, parse_amount, parse_date, pretty_table, today};

pub fn handle(storage: &Storage, m: &clap::ArgMatches) -> Result<()> {
    AccountStore::new(storage).require_session()?;
    match m.subcommand() {
        Some(("add", sub)) => add(storage, sub)?,
        Some(("list", sub)) => list(storage, sub)?,
        Some(("settle", sub)) => settle(storage, sub)?,
        Some(("rm", sub)) => rm(storage, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let type_arg = sub.get_one::<String>("type").unwrap();
    let r#type = LoanType::parse(type_arg)
        .ok_or_else(|| anyhow::anyhow!("Unknown loan type '{}', expected given or taken", type_arg))?;
    let person = sub.get_one::<String>("person").unwrap().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let settled = sub.get_flag("settled");
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let mut ledger = LedgerStore::load(storage)?;
    ledger.add_loan(r#type, person.clone(), date, amount, settled, note)?;
    println!(
        "Recorded loan {} {} — {} (total: {})",
        r#type.as_str(),
        fmt_inr(&amount.abs()),
        person,
        fmt_inr(&ledger.total_loans())
    );
    Ok(())
}

fn list(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let filter_arg = sub.get_one::<String>("filter").unwrap();
    let filter = LoanFilter::parse(filter_arg)
        .ok_or_else(|| anyhow::anyhow!("Unknown loan filter '{}'", filter_arg))?;
    let ledger = LedgerStore::load(storage)?;
    let rows: Vec<Vec<String>> = ledger
        .filter_loans(filter)
        .into_iter()
        .map(|row| {
            vec![
                row.index.to_string(),
                row.record.r#type.as_str().to_uppercase(),
                row.record.person,
                row.record.date.to_string(),
                fmt_inr(&row.record.price),
                if row.record.settled { "settled" } else { "open" }.to_string(),
                row.record.description.unwrap_or_default(),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No loans yet.");
    } else {
        println!(
            "{}",
            pretty_table(
                &["#", "Type", "Person", "Date", "Amount", "Status", "Note"],
                rows
            )
        );
    }
    println!("Total loans: {}", fmt_inr(&ledger.total_loans()));
    Ok(())
}

fn settle(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let settled = !sub.get_flag("undo");
    let mut ledger = LedgerStore::load(storage)?;
    ledger.toggle_loan_settled(index, settled)?;
    println!(
        "Loan #{} marked {}",
        index,
        if settled { "settled" } else { "unsettled" }
    );
    Ok(())
}

fn rm(storage: &Storage, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let mut ledger = LedgerStore::load(storage)?;
    ledger.delete_loan(index)?;
    println!("Deleted loan #{} (total: {})", index, fmt_inr(&ledger.total_loans()));
    Ok(())
}
