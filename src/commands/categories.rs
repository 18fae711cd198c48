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
use crate::utils::pretty_table;

fn parse_kind(s: &str) -> Result<TxKind> {
    match s {
        "income" => Ok(TxKind::Income),
        "expense" | "expenses" => Ok(TxKind::Expenses),
        _ => anyhow::bail!("Unknown kind '{}', expected income or expense", s),
    }
}

pub fn handle(storage: &Storage, m: &clap::ArgMatches) -> Result<()> {
    AccountStore::new(storage).require_session()?;
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            let name = sub.get_one::<String>("name").unwrap();
            let mut ledger = LedgerStore::load(storage)?;
            ledger.add_category(kind, name)?;
            println!("Categories for {}: {}", kind.as_str(), ledger.categories(kind).join(", "));
        }
        Some(("list", sub)) => {
            let ledger = LedgerStore::load(storage)?;
            let kinds = match sub.get_one::<String>("kind") {
                Some(s) => vec![parse_kind(s)?],
                None => vec![TxKind::Income, TxKind::Expenses],
            };
            let mut rows = Vec::new();
            for kind in kinds {
                for name in ledger.categories(kind) {
                    rows.push(vec![kind.as_str().to_string(), name.clone()]);
                }
            }
            println!("{}", pretty_table(&["Kind", "Category"], rows));
        }
        _ => {}
    }
    Ok(())
}
