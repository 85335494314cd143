// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::config::Config;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate::{load_csv, validate_csv_structure};

pub fn handle(_cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("file").unwrap().trim();
    let json_flag = m.get_flag("json");

    let ds = load_csv(Path::new(path))?;
    let report = validate_csv_structure(&ds);

    if maybe_print_json(json_flag, false, &report)? {
        return validity_result(&report);
    }

    for w in &report.warnings {
        eprintln!("warning: {}", w);
    }
    let q = &report.data_quality;
    let rows = vec![
        vec!["Total rows".to_string(), q.total_rows.to_string()],
        vec!["Valid rows (est.)".to_string(), q.valid_rows.to_string()],
        vec!["Date errors".to_string(), q.date_errors.to_string()],
        vec!["Amount errors".to_string(), q.amount_errors.to_string()],
        vec!["Type errors".to_string(), q.type_errors.to_string()],
        vec!["Duplicates".to_string(), q.duplicate_count.to_string()],
    ];
    println!("{}", pretty_table(&["Check", "Count"], rows));

    validity_result(&report)
}

fn validity_result(report: &crate::models::ValidationReport) -> Result<()> {
    if report.is_valid {
        println!("CSV structure OK");
        Ok(())
    } else {
        Err(anyhow!("{}", report.errors.join("; ")))
    }
}
