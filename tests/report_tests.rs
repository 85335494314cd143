// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finsum::breakdown::calculate;
use finsum::models::{FileInfo, Transaction, TxType};
use finsum::report::{render, save};
use finsum::utils::{fmt_currency, format_date_range};
use rust_decimal::Decimal;

fn sample_breakdown() -> (finsum::models::Breakdown, FileInfo) {
    let rows = vec![
        Transaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            description: "Whole Foods".to_string(),
            amount: Decimal::new(-123456, 2),
            tx_type: TxType::Debit,
            category: None,
            account: None,
            balance: None,
        },
        Transaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            description: "Salary".to_string(),
            amount: Decimal::new(500000, 2),
            tx_type: TxType::Credit,
            category: None,
            account: None,
            balance: None,
        },
    ];
    let info = FileInfo {
        filename: "jan.csv".to_string(),
        transaction_count: rows.len(),
        date_range: format_date_range(rows[0].date, rows[1].date),
    };
    (calculate(&rows), info)
}

#[test]
fn render_contains_all_sections() {
    let (breakdown, info) = sample_breakdown();
    let md = render("Analysis body here.", &breakdown, &info);

    assert!(md.starts_with("# Daily Financial Summary Report"));
    assert!(md.contains("**Data Source:** jan.csv"));
    assert!(md.contains("**Transactions:** 2"));
    assert!(md.contains("**Date Range:** January 01, 2025 - January 10, 2025"));
    assert!(md.contains("## Executive Summary"));
    assert!(md.contains("| **Total Income** | $5,000.00 |"));
    assert!(md.contains("| **Total Spent** | $1,234.56 |"));
    assert!(md.contains("| **Net Cash Flow** | $3,765.44 |"));
    assert!(md.contains("## Financial Analysis"));
    assert!(md.contains("Analysis body here."));
    assert!(md.contains("## Spending Breakdown by Category"));
    assert!(md.contains("| **Groceries** | $1,234.56 | 1 | $1,234.56 | 100.0% |"));
    assert!(md.contains("## Report Information"));
}

#[test]
fn render_notes_when_nothing_was_categorized() {
    let info = FileInfo {
        filename: "empty.csv".to_string(),
        transaction_count: 0,
        date_range: "Unknown".to_string(),
    };
    let md = render("n/a", &calculate(&[]), &info);
    assert!(md.contains("*No categorized spending found.*"));
}

#[test]
fn negative_net_flow_is_signed_in_summary() {
    let rows = vec![Transaction {
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        description: "Rent".to_string(),
        amount: Decimal::new(-90000, 2),
        tx_type: TxType::Debit,
        category: None,
        account: None,
        balance: None,
    }];
    let info = FileInfo {
        filename: "rent.csv".to_string(),
        transaction_count: 1,
        date_range: "January 01, 2025".to_string(),
    };
    let md = render("n/a", &calculate(&rows), &info);
    assert!(md.contains("| **Net Cash Flow** | -$900.00 |"));
}

#[test]
fn save_writes_timestamped_markdown_file() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports");
    let path = save("# Report\n", &nested).unwrap();

    assert!(path.exists());
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("financial_analysis_"));
    assert!(name.ends_with(".md"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");
}

#[test]
fn currency_formatting_groups_thousands() {
    assert_eq!(fmt_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
    assert_eq!(fmt_currency(Decimal::new(-5000, 2)), "$50.00");
    assert_eq!(fmt_currency(Decimal::ZERO), "$0.00");
    assert_eq!(fmt_currency(Decimal::new(999, 0)), "$999.00");
}

#[test]
fn date_range_collapses_single_day() {
    let d = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();
    assert_eq!(format_date_range(d, d), "October 24, 2025");
}
