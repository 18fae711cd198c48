// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The financial dataset: income, expenses, savings, and loans, with
//! per-kind category lists. Totals are recomputed from the records on every
//! read rather than maintained as running sums, so they cannot drift; at
//! personal-finance record counts the O(n) walk is irrelevant. The whole
//! dataset is persisted as one JSON value after every mutation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::db::Storage;
use crate::error::AppError;
use crate::models::{
    Indexed, LedgerDataset, LoanFilter, LoanRecord, LoanType, SavingsMode, SortKey, Transaction,
    TxKind,
};

const DATA_KEY: &str = "expenseData_v1";

pub struct LedgerStore<'a> {
    store: &'a Storage,
    data: LedgerDataset,
}

impl<'a> LedgerStore<'a> {
    /// Loads the persisted dataset, or seeds the defaults when the value is
    /// absent or does not parse. A corrupt value is treated as absent.
    pub fn load(store: &'a Storage) -> Result<Self, AppError> {
        let data = match store.get(DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => LedgerDataset::default(),
        };
        Ok(Self { store, data })
    }

    fn save(&self) -> Result<(), AppError> {
        self.store.set(DATA_KEY, &serde_json::to_string(&self.data)?)?;
        Ok(())
    }

    fn collection(&self, kind: TxKind) -> &Vec<Transaction> {
        match kind {
            TxKind::Income => &self.data.income,
            TxKind::Expenses => &self.data.expenses,
            TxKind::Savings => &self.data.savings,
        }
    }

    fn collection_mut(&mut self, kind: TxKind) -> &mut Vec<Transaction> {
        match kind {
            TxKind::Income => &mut self.data.income,
            TxKind::Expenses => &mut self.data.expenses,
            TxKind::Savings => &mut self.data.savings,
        }
    }

    pub fn add_transaction(
        &mut self,
        kind: TxKind,
        date: NaiveDate,
        price: Decimal,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<(), AppError> {
        self.collection_mut(kind).push(Transaction {
            date,
            price,
            category,
            description,
        });
        self.save()
    }

    /// Savings entries store a signed price fixed here at entry time:
    /// `minus` negates the magnitude, `add` keeps it positive. The sign is
    /// never re-derived after creation.
    pub fn add_saving(
        &mut self,
        date: NaiveDate,
        magnitude: Decimal,
        mode: SavingsMode,
        description: Option<String>,
    ) -> Result<(), AppError> {
        let price = match mode {
            SavingsMode::Add => magnitude.abs(),
            SavingsMode::Minus => -magnitude.abs(),
        };
        self.add_transaction(TxKind::Savings, date, price, None, description)
    }

    /// Removes by true collection index. Out of bounds is a silent no-op and
    /// does not touch storage.
    pub fn delete_transaction(&mut self, kind: TxKind, index: usize) -> Result<(), AppError> {
        let coll = self.collection_mut(kind);
        if index >= coll.len() {
            return Ok(());
        }
        coll.remove(index);
        self.save()
    }

    /// A freshly sorted copy; the stored order is never mutated. Every row
    /// carries its true collection index so deletes taken from a sorted
    /// listing land on the right record. Ties keep insertion order (stable
    /// sort); a missing category compares as the empty string.
    pub fn list_transactions(
        &self,
        kind: TxKind,
        sort_by: Option<SortKey>,
    ) -> Vec<Indexed<Transaction>> {
        let mut rows: Vec<Indexed<Transaction>> = self
            .collection(kind)
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect();
        match sort_by {
            Some(SortKey::DateDesc) => rows.sort_by(|a, b| b.record.date.cmp(&a.record.date)),
            Some(SortKey::DateAsc) => rows.sort_by(|a, b| a.record.date.cmp(&b.record.date)),
            Some(SortKey::PriceDesc) => rows.sort_by(|a, b| b.record.price.cmp(&a.record.price)),
            Some(SortKey::PriceAsc) => rows.sort_by(|a, b| a.record.price.cmp(&b.record.price)),
            Some(SortKey::Category) => rows.sort_by(|a, b| {
                let ca = a.record.category.as_deref().unwrap_or("");
                let cb = b.record.category.as_deref().unwrap_or("");
                ca.cmp(cb)
            }),
            None => {}
        }
        rows
    }

    pub fn categories(&self, kind: TxKind) -> &[String] {
        match kind {
            TxKind::Income => &self.data.categories.income,
            TxKind::Expenses => &self.data.categories.expenses,
            TxKind::Savings => &self.data.categories.savings,
        }
    }

    /// Appends at the end; idempotent. Empty (after trimming) or already
    /// present (case-sensitive) is a no-op that skips the save. Deleting is
    /// not offered: existing records keep whatever category string they were
    /// created with, present in the set or not.
    pub fn add_category(&mut self, kind: TxKind, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        let set = match kind {
            TxKind::Income => &mut self.data.categories.income,
            TxKind::Expenses => &mut self.data.categories.expenses,
            TxKind::Savings => &mut self.data.categories.savings,
        };
        if set.iter().any(|c| c == name) {
            return Ok(());
        }
        set.push(name.to_string());
        self.save()
    }

    pub fn total(&self, kind: TxKind) -> Decimal {
        self.collection(kind).iter().map(|t| t.price).sum()
    }

    /// Sums loan prices with no sign distinction between given and taken.
    /// This mirrors the historical behavior: a loan either way counts
    /// positively toward the aggregates.
    pub fn total_loans(&self) -> Decimal {
        self.data.loans.iter().map(|l| l.price).sum()
    }

    pub fn net_worth(&self) -> Decimal {
        self.total(TxKind::Savings) + self.total(TxKind::Income) - self.total(TxKind::Expenses)
            + self.total_loans()
    }

    pub fn current_balance(&self) -> Decimal {
        self.total(TxKind::Income) - self.total(TxKind::Expenses) + self.total_loans()
    }

    pub fn add_loan(
        &mut self,
        r#type: LoanType,
        person: String,
        date: NaiveDate,
        price: Decimal,
        settled: bool,
        description: Option<String>,
    ) -> Result<(), AppError> {
        self.data.loans.push(LoanRecord {
            r#type,
            person,
            date,
            // non-negative invariant, coerced at entry
            price: price.abs(),
            settled,
            description,
        });
        self.save()
    }

    pub fn toggle_loan_settled(&mut self, index: usize, settled: bool) -> Result<(), AppError> {
        match self.data.loans.get_mut(index) {
            Some(loan) => {
                loan.settled = settled;
                self.save()
            }
            None => Ok(()),
        }
    }

    pub fn delete_loan(&mut self, index: usize) -> Result<(), AppError> {
        if index >= self.data.loans.len() {
            return Ok(());
        }
        self.data.loans.remove(index);
        self.save()
    }

    /// Filtering preserves the underlying order and never sorts. Rows carry
    /// their true collection index so settle/delete on a filtered listing
    /// edit the correct underlying record.
    pub fn filter_loans(&self, filter: LoanFilter) -> Vec<Indexed<LoanRecord>> {
        self.data
            .loans
            .iter()
            .cloned()
            .enumerate()
            .filter(|(_, l)| match filter {
                LoanFilter::All => true,
                LoanFilter::Given => l.r#type == LoanType::Given,
                LoanFilter::Taken => l.r#type == LoanType::Taken,
                LoanFilter::Settled => l.settled,
                LoanFilter::Unsettled => !l.settled,
            })
            .map(|(index, record)| Indexed { index, record })
            .collect()
    }
}
