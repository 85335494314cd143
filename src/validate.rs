// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use thiserror::Error;

use crate::models::{DataQuality, RawDataset, Transaction, TxType, ValidationReport};
use crate::parse::{parse_amount, parse_date, standardize_type};

pub const REQUIRED_COLUMNS: &[&str] = &["Date", "Description", "Amount", "Type"];
pub const OPTIONAL_COLUMNS: &[&str] = &["Category", "Account", "Balance"];

/// Literal labels the quality check accepts without a warning. Narrower on
/// purpose than `standardize_type`: other casings and synonyms are counted
/// as type errors here even though cleaning recovers most of them.
pub const VALID_TYPES: &[&str] = &["Debit", "Credit", "debit", "credit"];

#[derive(Debug, Error)]
pub enum ValidationError {
    /// Required columns are missing. Fatal: cleaning must not run and there
    /// is no partial result. Carries the "; "-joined error list.
    #[error("CSV structure validation failed: {0}")]
    Structure(String),
}

/// Read a transaction CSV into a raw dataset. A missing file is fatal and
/// names the path; header names are trimmed, ragged rows tolerated.
pub fn load_csv(path: &Path) -> Result<RawDataset> {
    if !path.exists() {
        return Err(anyhow!("Transaction file not found: {}", path.display()));
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Read CSV header from {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result.with_context(|| format!("Read CSV record from {}", path.display()))?;
        rows.push(rec.iter().map(|f| f.to_string()).collect());
    }
    Ok(RawDataset { headers, rows })
}

/// Structural check (required/optional columns) plus, when the structure is
/// sound, per-field quality tallies. Row-level defects only ever produce
/// warnings; `is_valid` reflects structure alone.
pub fn validate_csv_structure(ds: &RawDataset) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| ds.column(c).is_none())
        .collect();
    if !missing.is_empty() {
        errors.push(format!("Missing required columns: {}", missing.join(", ")));
    }

    let unknown: Vec<&str> = ds
        .headers
        .iter()
        .map(String::as_str)
        .filter(|h| !REQUIRED_COLUMNS.contains(h) && !OPTIONAL_COLUMNS.contains(h))
        .collect();
    if !unknown.is_empty() {
        warnings.push(format!("Unknown columns found: {}", unknown.join(", ")));
    }

    let is_valid = errors.is_empty();
    let data_quality = if is_valid {
        check_data_quality(ds, &mut warnings)
    } else {
        DataQuality {
            total_rows: ds.rows.len(),
            ..DataQuality::default()
        }
    };

    ValidationReport {
        is_valid,
        errors,
        warnings,
        data_quality,
    }
}

fn check_data_quality(ds: &RawDataset, warnings: &mut Vec<String>) -> DataQuality {
    let total_rows = ds.rows.len();

    let mut seen: HashSet<&[String]> = HashSet::new();
    let mut duplicate_count = 0;
    for row in &ds.rows {
        if !seen.insert(row.as_slice()) {
            duplicate_count += 1;
        }
    }
    if duplicate_count > 0 {
        warnings.push(format!("Found {} duplicate transactions", duplicate_count));
    }

    let mut date_errors = 0;
    let mut amount_errors = 0;
    let mut type_errors = 0;
    let mut invalid_types: Vec<&str> = Vec::new();
    for row in &ds.rows {
        if ds
            .field(row, "Date")
            .map(|v| v.trim().is_empty())
            .unwrap_or(true)
        {
            date_errors += 1;
        }
        if parse_amount(ds.field(row, "Amount").unwrap_or("")).is_none() {
            amount_errors += 1;
        }
        let type_val = ds.field(row, "Type").unwrap_or("");
        if !VALID_TYPES.contains(&type_val) {
            type_errors += 1;
            if !invalid_types.contains(&type_val) {
                invalid_types.push(type_val);
            }
        }
    }
    if date_errors > 0 {
        warnings.push(format!("Found {} invalid/missing dates", date_errors));
    }
    if amount_errors > 0 {
        warnings.push(format!("Found {} invalid amounts", amount_errors));
    }
    if type_errors > 0 {
        warnings.push(format!(
            "Found {} invalid transaction types: {}",
            type_errors,
            invalid_types.join(", ")
        ));
    }

    // Deliberately coarse: the max() underestimates overlap across rows.
    let valid_rows = total_rows - date_errors.max(amount_errors).max(type_errors);

    DataQuality {
        total_rows,
        valid_rows,
        date_errors,
        amount_errors,
        type_errors,
        duplicate_count,
    }
}

/// Clean a structurally valid dataset: parse every date, amount, and type,
/// drop rows whose cleaned date or amount is missing (an unparseable type
/// just becomes Unknown), then remove fully duplicate rows, first occurrence
/// kept. Quality warnings never block this; missing required columns do.
pub fn clean_and_validate_data(ds: &RawDataset) -> Result<Vec<Transaction>, ValidationError> {
    let report = validate_csv_structure(ds);
    if !report.is_valid {
        return Err(ValidationError::Structure(report.errors.join("; ")));
    }

    let before = ds.rows.len();
    let mut seen: HashSet<Transaction> = HashSet::new();
    let mut cleaned = Vec::new();
    for row in &ds.rows {
        let date = match ds.field(row, "Date").and_then(parse_date) {
            Some(d) => d,
            None => continue,
        };
        let amount = match ds.field(row, "Amount").and_then(parse_amount) {
            Some(a) => a,
            None => continue,
        };
        let tx_type = ds
            .field(row, "Type")
            .map(standardize_type)
            .unwrap_or(TxType::Unknown);

        let tx = Transaction {
            date,
            description: ds.field(row, "Description").unwrap_or("").trim().to_string(),
            amount,
            tx_type,
            category: optional_field(ds, row, "Category"),
            account: optional_field(ds, row, "Account"),
            balance: optional_field(ds, row, "Balance"),
        };
        if seen.insert(tx.clone()) {
            cleaned.push(tx);
        }
    }

    eprintln!(
        "Data cleaning complete: {} -> {} valid transactions",
        before,
        cleaned.len()
    );
    Ok(cleaned)
}

fn optional_field(ds: &RawDataset, row: &[String], name: &str) -> Option<String> {
    ds.field(row, name)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
