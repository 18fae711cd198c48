// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Rupee rendering with Indian digit grouping (en-IN style): the last three
/// digits form one group, every group before that has two. At most two
/// decimal places, trailing zeros trimmed.
pub fn fmt_inr(d: &Decimal) -> String {
    let r = d.round_dp(2).normalize();
    let neg = r.is_sign_negative() && !r.is_zero();
    let s = r.abs().to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut num = group_indian(int_part);
    if let Some(f) = frac_part {
        num.push('.');
        num.push_str(f);
    }
    if neg {
        format!("₹-{}", num)
    } else {
        format!("₹{}", num)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    let mut out = String::new();
    for g in groups.iter().rev() {
        out.push_str(g);
        out.push(',');
    }
    out.push_str(tail);
    out
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}
