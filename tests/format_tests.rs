// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::utils::{fmt_inr, parse_amount, parse_date};

fn inr(s: &str) -> String {
    fmt_inr(&s.parse().unwrap())
}

#[test]
fn indian_digit_grouping() {
    assert_eq!(inr("0"), "₹0");
    assert_eq!(inr("100"), "₹100");
    assert_eq!(inr("1234"), "₹1,234");
    assert_eq!(inr("123456"), "₹1,23,456");
    assert_eq!(inr("1234567.5"), "₹12,34,567.5");
    assert_eq!(inr("123456789"), "₹12,34,56,789");
}

#[test]
fn negative_amounts_and_rounding() {
    assert_eq!(inr("-100000"), "₹-1,00,000");
    assert_eq!(inr("12.345"), "₹12.35");
    assert_eq!(inr("12.30"), "₹12.3");
}

#[test]
fn amount_parsing() {
    assert_eq!(parse_amount("12.50").unwrap(), "12.5".parse().unwrap());
    assert!(parse_amount("twelve").is_err());
}

#[test]
fn date_parsing() {
    assert!(parse_date("2024-01-05").is_ok());
    assert!(parse_date("05/01/2024").is_err());
    assert!(parse_date("2024-13-01").is_err());
}
