// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String, // stored lower-cased
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub r#type: LoanType,
    pub person: String,
    pub date: NaiveDate,
    pub price: Decimal, // non-negative, abs-coerced at entry
    pub settled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Given,
    Taken,
}

impl LoanType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "given" => Some(Self::Given),
            "taken" => Some(Self::Taken),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::Taken => "taken",
        }
    }
}

/// Direction toggle for a savings entry; the stored sign is fixed at creation
/// and never re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsMode {
    Add,
    Minus,
}

impl SavingsMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "minus" => Some(Self::Minus),
            _ => None,
        }
    }
}

/// Which transaction collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Income,
    Expenses,
    Savings,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expenses => "expenses",
            Self::Savings => "savings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    PriceDesc,
    PriceAsc,
    Category,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "date_desc" => Some(Self::DateDesc),
            "date_asc" => Some(Self::DateAsc),
            "price_desc" => Some(Self::PriceDesc),
            "price_asc" => Some(Self::PriceAsc),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanFilter {
    All,
    Given,
    Taken,
    Settled,
    Unsettled,
}

impl LoanFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "given" => Some(Self::Given),
            "taken" => Some(Self::Taken),
            "settled" => Some(Self::Settled),
            "unsettled" => Some(Self::Unsettled),
            _ => None,
        }
    }
}

/// A record paired with its true index in the underlying collection. Listings
/// re-order and filters drop elements, so mutations must never address a
/// record by rendered position.
#[derive(Debug, Clone)]
pub struct Indexed<T> {
    pub index: usize,
    pub record: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySets {
    #[serde(default)]
    pub income: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<String>,
    #[serde(default)]
    pub savings: Vec<String>,
    // reserved in the serialized shape; loans have no user-editable categories
    #[serde(default)]
    pub loans: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDataset {
    #[serde(default)]
    pub income: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
    #[serde(default)]
    pub savings: Vec<Transaction>,
    #[serde(default)]
    pub loans: Vec<LoanRecord>,
    pub categories: CategorySets,
}

impl Default for LedgerDataset {
    fn default() -> Self {
        Self {
            income: Vec::new(),
            expenses: Vec::new(),
            savings: Vec::new(),
            loans: Vec::new(),
            categories: CategorySets {
                income: vec!["Salary".to_string()],
                expenses: vec![
                    "Food".to_string(),
                    "Transport".to_string(),
                    "Shopping".to_string(),
                ],
                savings: Vec::new(),
                loans: Vec::new(),
            },
        }
    }
}
