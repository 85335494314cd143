// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::breakdown::calculate;
use crate::config::Config;
use crate::utils::{fmt_currency, fmt_percentage, maybe_print_json, pretty_table};
use crate::validate::{clean_and_validate_data, load_csv};

pub fn handle(_cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("file").unwrap().trim();
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let ds = load_csv(Path::new(path))?;
    let cleaned = clean_and_validate_data(&ds)?;
    let breakdown = calculate(&cleaned);

    if maybe_print_json(json_flag, jsonl_flag, &breakdown)? {
        return Ok(());
    }

    let s = &breakdown.summary;
    let summary_rows = vec![
        vec!["Total Income".to_string(), fmt_currency(s.total_income)],
        vec!["Total Spent".to_string(), fmt_currency(s.total_spent)],
        vec![
            "Net Cash Flow".to_string(),
            format!(
                "{}{}",
                if s.net_flow.is_sign_negative() { "-" } else { "" },
                fmt_currency(s.net_flow)
            ),
        ],
        vec!["Transactions".to_string(), s.transaction_count.to_string()],
        vec![
            "Income / Expense rows".to_string(),
            format!(
                "{} / {}",
                breakdown.by_type.income_count, breakdown.by_type.expense_count
            ),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], summary_rows));

    let mut category_rows = Vec::new();
    for row in &breakdown.categories {
        category_rows.push(vec![
            row.name.clone(),
            fmt_currency(row.total),
            row.count.to_string(),
            fmt_currency(row.average),
            fmt_percentage(row.percentage),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["Category", "Spent", "Count", "Average", "Share"],
            category_rows
        )
    );
    Ok(())
}
