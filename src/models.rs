// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One CSV file as read from disk: trimmed header names plus raw string rows.
/// Column order is whatever the file used; lookups go by header name.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawDataset {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value for a named column, if both the column and the cell exist.
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.column(name).and_then(|i| row.get(i)).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxType {
    Debit,
    Credit,
    Unknown,
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxType::Debit => write!(f, "Debit"),
            TxType::Credit => write!(f, "Credit"),
            TxType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A cleaned transaction row. Negative amount = outflow, positive = inflow;
/// the sign is the only income/expense signal used downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub tx_type: TxType,
    pub category: Option<String>,
    pub account: Option<String>,
    pub balance: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataQuality {
    pub total_rows: usize,
    /// Estimated as total_rows - max(date_errors, amount_errors, type_errors).
    /// Not a per-row partition: it undercounts when different rows fail
    /// different checks. Kept for compatibility with existing reports.
    pub valid_rows: usize,
    pub date_errors: usize,
    pub amount_errors: usize,
    pub type_errors: usize,
    pub duplicate_count: usize,
}

/// Outcome of structural + data-quality validation. `is_valid` goes false
/// only when required columns are missing; row-level defects are warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub data_quality: DataQuality,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_spent: Decimal,
    pub net_flow: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ByType {
    pub income_count: usize,
    pub expense_count: usize,
}

/// Aggregate spending summary computed from a cleaned dataset.
/// Categories are sorted descending by total; ties keep the fixed
/// category-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    pub summary: Summary,
    pub categories: Vec<CategoryRow>,
    pub by_type: ByType,
}

/// Source-file metadata carried into the rendered report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    pub transaction_count: usize,
    pub date_range: String,
}
