// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

const UA: &str = concat!("finsum/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Format an amount as `$X,XXX.YY`. The absolute value is shown; sign is
/// carried by context (income vs spent rows), matching the report layout.
pub fn fmt_currency(d: Decimal) -> String {
    let rounded = d.abs().round_dp(2);
    let s = format!("{:.2}", rounded);
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("${}.{}", group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

pub fn fmt_percentage(d: Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

/// "October 24, 2025" for a single day, "start - end" otherwise.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%B %d, %Y").to_string()
    } else {
        format!(
            "{} - {}",
            start.format("%B %d, %Y"),
            end.format("%B %d, %Y")
        )
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
