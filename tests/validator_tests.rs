// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;
use std::io::Write;

use finsum::models::{RawDataset, TxType};
use finsum::validate::{clean_and_validate_data, load_csv, validate_csv_structure};
use tempfile::NamedTempFile;

fn dataset(headers: &[&str], rows: &[&[&str]]) -> RawDataset {
    RawDataset {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

#[test]
fn missing_required_columns_fail_structure() {
    let ds = dataset(
        &["Date", "Description", "Amount"],
        &[&["2025-01-01", "Coffee", "-4.50"]],
    );
    let report = validate_csv_structure(&ds);
    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Missing required columns: Type"]);
    // Quality checks are skipped for structurally invalid data.
    assert_eq!(report.data_quality.total_rows, 1);
    assert_eq!(report.data_quality.valid_rows, 0);
}

#[test]
fn cleaning_refuses_structurally_invalid_data() {
    let ds = dataset(&["Description", "Amount"], &[&["Coffee", "-4.50"]]);
    let err = clean_and_validate_data(&ds).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Missing required columns: Date, Type"), "{}", msg);
}

#[test]
fn unknown_columns_warn_but_do_not_invalidate() {
    let ds = dataset(
        &["Date", "Description", "Amount", "Type", "Account", "Memo"],
        &[&["2025-01-01", "Coffee", "-4.50", "Debit", "Checking", "x"]],
    );
    let report = validate_csv_structure(&ds);
    assert!(report.is_valid);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("Unknown columns found: Memo")),
        "{:?}",
        report.warnings
    );
}

#[test]
fn quality_counts_and_valid_rows_estimate() {
    let ds = dataset(
        &["Date", "Description", "Amount", "Type"],
        &[
            &["2025-01-01", "Coffee", "-4.50", "Debit"],
            &["", "Blank date", "-1.00", "Debit"],
            &["2025-01-02", "Bad amount", "abc", "DEBIT"],
            &["2025-01-03", "Odd type", "-2.00", "purchase"],
        ],
    );
    let report = validate_csv_structure(&ds);
    assert!(report.is_valid);
    let q = &report.data_quality;
    assert_eq!(q.total_rows, 4);
    assert_eq!(q.date_errors, 1);
    assert_eq!(q.amount_errors, 1);
    // DEBIT fails the literal allow-list even though cleaning recovers it.
    assert_eq!(q.type_errors, 2);
    // total - max(1, 1, 2), the inherited estimate, not a row partition.
    assert_eq!(q.valid_rows, 2);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("invalid transaction types") && w.contains("DEBIT")),
        "{:?}",
        report.warnings
    );
}

#[test]
fn duplicates_are_counted_but_not_removed_by_validation() {
    let row: &[&str] = &["2025-01-01", "Coffee", "-4.50", "Debit"];
    let ds = dataset(&["Date", "Description", "Amount", "Type"], &[row, row, row]);
    let report = validate_csv_structure(&ds);
    assert_eq!(report.data_quality.duplicate_count, 2);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("Found 2 duplicate transactions")),
        "{:?}",
        report.warnings
    );
    assert_eq!(ds.rows.len(), 3);
}

#[test]
fn cleaning_drops_bad_rows_dedupes_and_standardizes() {
    let ds = dataset(
        &["Date", "Description", "Amount", "Type"],
        &[
            &["2025-01-01", "Coffee", "-4.50", "Debit"],
            &["2025-01-01", "Coffee", "-4.50", "Debit"],
            &["", "Blank date", "-1.00", "Debit"],
            &["2025-01-02", "Bad amount", "abc", "Debit"],
            &["01/03/2025", "Paycheck", "$1,000.00", "DEPOSIT"],
            &["2025-01-04", "Mystery", "-2.00", "transfer"],
        ],
    );
    let cleaned = clean_and_validate_data(&ds).unwrap();

    // Bad date and bad amount dropped, duplicate collapsed.
    assert_eq!(cleaned.len(), 3);
    let mut seen = HashSet::new();
    for tx in &cleaned {
        assert!(seen.insert(tx.clone()), "duplicate survived cleaning");
        assert!(matches!(
            tx.tx_type,
            TxType::Debit | TxType::Credit | TxType::Unknown
        ));
    }

    // Synonyms recovered, unknowns tolerated.
    assert_eq!(cleaned[1].tx_type, TxType::Credit);
    assert_eq!(cleaned[1].amount, rust_decimal::Decimal::new(100000, 2));
    assert_eq!(cleaned[2].tx_type, TxType::Unknown);
}

#[test]
fn cleaning_runs_despite_quality_warnings() {
    // Every row has some defect; cleaning still produces what it can.
    let ds = dataset(
        &["Date", "Description", "Amount", "Type"],
        &[
            &["2025-01-01", "Odd type", "-2.00", "purchase"],
            &["", "Unsalvageable", "abc", ""],
        ],
    );
    let cleaned = clean_and_validate_data(&ds).unwrap();
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].tx_type, TxType::Unknown);
}

#[test]
fn load_csv_reads_headers_and_optional_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Date,Description,Amount,Type,Category\n2025-01-01,Coffee,-4.50,Debit,Dining"
    )
    .unwrap();
    file.flush().unwrap();

    let ds = load_csv(file.path()).unwrap();
    assert_eq!(
        ds.headers,
        vec!["Date", "Description", "Amount", "Type", "Category"]
    );
    assert_eq!(ds.rows.len(), 1);

    let cleaned = clean_and_validate_data(&ds).unwrap();
    assert_eq!(cleaned[0].category.as_deref(), Some("Dining"));
    assert_eq!(cleaned[0].account, None);
}

#[test]
fn load_csv_missing_file_names_the_path() {
    let err = load_csv(std::path::Path::new("/nonexistent/tx.csv")).unwrap_err();
    assert!(
        err.to_string()
            .contains("Transaction file not found: /nonexistent/tx.csv")
    );
}
