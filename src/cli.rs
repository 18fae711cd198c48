// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn tx_cmd(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand(
            Command::new("add")
                .about("Record an entry")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                )
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("list").about("List entries").arg(
                Arg::new("sort")
                    .long("sort")
                    .help("date_desc | date_asc | price_desc | price_asc | category"),
            ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete the entry with the given index (# column)")
                .arg(
                    Arg::new("index")
                        .long("index")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
}

fn savings_cmd() -> Command {
    Command::new("savings")
        .about("Savings adjustments (signed contributions to net worth)")
        .subcommand(
            Command::new("add")
                .about("Record an adjustment")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .default_value("add")
                        .help("add | minus (subtract from net worth)"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("list").about("List adjustments").arg(
                Arg::new("sort")
                    .long("sort")
                    .help("date_desc | date_asc | price_desc | price_asc"),
            ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete the adjustment with the given index (# column)")
                .arg(
                    Arg::new("index")
                        .long("index")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
}

fn loan_cmd() -> Command {
    Command::new("loan")
        .about("Peer loans, given or taken")
        .subcommand(
            Command::new("add")
                .about("Record a loan")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("given")
                        .help("given | taken"),
                )
                .arg(Arg::new("person").long("person").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                )
                .arg(
                    Arg::new("settled")
                        .long("settled")
                        .action(ArgAction::SetTrue)
                        .help("Mark as already settled"),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("list").about("List loans").arg(
                Arg::new("filter")
                    .long("filter")
                    .default_value("all")
                    .help("all | given | taken | settled | unsettled"),
            ),
        )
        .subcommand(
            Command::new("settle")
                .about("Mark the loan with the given index (# column) settled")
                .arg(
                    Arg::new("index")
                        .long("index")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("undo")
                        .long("undo")
                        .action(ArgAction::SetTrue)
                        .help("Mark unsettled instead"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete the loan with the given index (# column)")
                .arg(
                    Arg::new("index")
                        .long("index")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Per-kind category lists for income and expense entries")
        .subcommand(
            Command::new("add")
                .about("Append a category (no-op if already present)")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .required(true)
                        .help("income | expense"),
                )
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(
            Command::new("list").about("List categories").arg(
                Arg::new("kind")
                    .long("kind")
                    .help("income | expense; both when omitted"),
            ),
        )
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .about("Local-first income, expense, savings, and loan tracker")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("signup")
                .about("Create the local account (overwrites any existing one)")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("login")
                .about("Open a session; with no credentials, tries remember-me")
                .arg(Arg::new("email").long("email").requires("password"))
                .arg(Arg::new("password").long("password").requires("email"))
                .arg(
                    Arg::new("remember")
                        .long("remember")
                        .action(ArgAction::SetTrue)
                        .help("Auto-login on later commands"),
                ),
        )
        .subcommand(Command::new("logout").about("Close the session"))
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(tx_cmd("income", "Income records"))
        .subcommand(tx_cmd("expense", "Expense records"))
        .subcommand(savings_cmd())
        .subcommand(loan_cmd())
        .subcommand(category_cmd())
        .subcommand(Command::new("summary").about("Totals, net worth, and current balance"))
}
