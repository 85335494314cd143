// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::{Breakdown, FileInfo};
use crate::utils::{fmt_currency, fmt_percentage};

/// Render the full markdown report: header, executive summary, analysis
/// section, per-category breakdown, footer.
pub fn render(analysis: &str, breakdown: &Breakdown, file_info: &FileInfo) -> String {
    let now = Local::now();
    let mut out = String::new();

    let _ = write!(
        out,
        "# Daily Financial Summary Report\n\n\
         **Generated:** {}  \n\
         **Data Source:** {}  \n\
         **Transactions:** {}  \n\
         **Date Range:** {}  \n\n---\n\n",
        now.format("%B %d, %Y at %I:%M %p"),
        file_info.filename,
        file_info.transaction_count,
        file_info.date_range
    );

    let s = &breakdown.summary;
    let _ = write!(
        out,
        "## Executive Summary\n\n\
         | Metric | Amount |\n\
         |--------|--------|\n\
         | **Total Income** | {} |\n\
         | **Total Spent** | {} |\n\
         | **Net Cash Flow** | {}{} |\n\
         | **Transactions** | {} |\n\n---\n\n",
        fmt_currency(s.total_income),
        fmt_currency(s.total_spent),
        if s.net_flow.is_sign_negative() { "-" } else { "" },
        fmt_currency(s.net_flow),
        s.transaction_count
    );

    let _ = write!(out, "## Financial Analysis\n\n{}\n\n---\n\n", analysis.trim_end());

    out.push_str("## Spending Breakdown by Category\n\n");
    if breakdown.categories.is_empty() {
        out.push_str("*No categorized spending found.*\n\n");
    } else {
        out.push_str("| Category | Amount | Transactions | Average | Percentage |\n");
        out.push_str("|----------|--------|--------------|---------|------------|\n");
        for row in &breakdown.categories {
            let _ = writeln!(
                out,
                "| **{}** | {} | {} | {} | {} |",
                row.name,
                fmt_currency(row.total),
                row.count,
                fmt_currency(row.average),
                fmt_percentage(row.percentage)
            );
        }
        out.push('\n');
    }
    out.push_str("---\n\n");

    let _ = write!(
        out,
        "## Report Information\n\n\
         - **Report Generated:** {}\n\
         - **Generator:** finsum v{}\n\n---\n\n\
         *This report was generated automatically. Please review all\n\
         recommendations and verify calculations before making financial\n\
         decisions.*\n",
        now.format("%Y-%m-%d %H:%M:%S"),
        env!("CARGO_PKG_VERSION")
    );
    out
}

/// Persist a rendered report under `reports_dir` with a timestamped name
/// and return the saved path.
pub fn save(report: &str, reports_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(reports_dir)
        .with_context(|| format!("Create reports dir {}", reports_dir.display()))?;
    let filename = format!(
        "financial_analysis_{}.md",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = reports_dir.join(filename);
    fs::write(&path, report).with_context(|| format!("Write report {}", path.display()))?;
    Ok(path)
}
