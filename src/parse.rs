// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::TxType;

/// Date formats tried in order; the first that parses wins. `%m/%d/%Y` is
/// listed before `%d/%m/%Y`, so day<=12 slash dates resolve as US dates.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%Y-%m-%d %H:%M:%S",
];

// Looser formats tried only after the fixed list fails.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y.%m.%d",
    "%Y%m%d",
];

/// Normalize a raw date string to a calendar date. Blank input and strings
/// no format recognizes come back as None; this never errors.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if fmt.contains("%H") {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        } else if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    permissive_parse(s)
}

fn permissive_parse(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

static CURRENCY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,€£¥]").unwrap());

/// Normalize a currency-formatted string to a signed decimal. Strips the
/// common currency symbols and thousands separators, converts accounting
/// parentheses to a leading minus, and returns None when the remainder is
/// not a number.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let stripped = CURRENCY_CHARS.replace_all(raw.trim(), "");
    let s = stripped.trim();
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        format!("-{}", &s[1..s.len() - 1]).parse::<Decimal>().ok()
    } else {
        s.parse::<Decimal>().ok()
    }
}

/// Map a free-text transaction type label onto the canonical set. This is
/// deliberately broader than the validator's literal allow-list, so labels
/// it flagged are often still recovered here.
pub fn standardize_type(raw: &str) -> TxType {
    match raw.trim().to_lowercase().as_str() {
        "debit" | "withdrawal" | "expense" | "out" | "-" => TxType::Debit,
        "credit" | "deposit" | "income" | "in" | "+" => TxType::Credit,
        _ => TxType::Unknown,
    }
}
