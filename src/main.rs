// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use billfold::models::TxKind;
use billfold::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let storage = db::Storage::open_or_init()?;

    match matches.subcommand() {
        Some(("signup", sub)) => commands::account::signup(&storage, sub)?,
        Some(("login", sub)) => commands::account::login(&storage, sub)?,
        Some(("logout", _)) => commands::account::logout(&storage)?,
        Some(("whoami", _)) => commands::account::whoami(&storage)?,
        Some(("income", sub)) => commands::transactions::handle(&storage, TxKind::Income, sub)?,
        Some(("expense", sub)) => commands::transactions::handle(&storage, TxKind::Expenses, sub)?,
        Some(("savings", sub)) => commands::savings::handle(&storage, sub)?,
        Some(("loan", sub)) => commands::loans::handle(&storage, sub)?,
        Some(("category", sub)) => commands::categories::handle(&storage, sub)?,
        Some(("summary", _)) => commands::summary::handle(&storage)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
