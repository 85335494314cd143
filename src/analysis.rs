// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt::Write as _;

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{Breakdown, FileInfo, Transaction};
use crate::utils::{fmt_currency, fmt_percentage, http_client};

pub const ANALYSIS_MODEL: &str = "claude-3-5-sonnet-20241022";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "You are a personal finance advisor AI assistant specializing in transaction analysis.

Your responsibilities:
1. Analyze bank transaction data from CSV files
2. Categorize each transaction accurately (groceries, dining, transportation, shopping, entertainment, bills, etc.)
3. Calculate total spending per category
4. Identify spending patterns and trends
5. Spot unusual or large transactions that need attention
6. Provide encouraging but realistic financial insights
7. Generate specific, actionable recommendations

Analysis Format:
- Spending Breakdown (by category with percentages)
- Top 3 Categories (with amounts and insights)
- Notable Transactions (large or unusual purchases)
- Daily Insights (3 observations about spending patterns)
- Action Items (3 specific ways to save money)
- Financial Health Score (1-10 with explanation)

Tone: Encouraging, practical, and focused on actionable improvements.

Please analyze the following transaction data and provide a comprehensive financial summary:";

/// Ways the AI collaborator can fail. The caller branches on the kind to
/// decide messaging; every kind is recoverable via the local fallback and
/// none is retried automatically.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("AI service credit balance exhausted")]
    CreditExhausted,
    #[error("AI service authentication failed: {0}")]
    Authentication(String),
    #[error("AI service rate limited")]
    RateLimited,
    #[error("AI service request failed: {0}")]
    Other(String),
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub struct AnalysisClient {
    api_key: String,
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl AnalysisClient {
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self> {
        Ok(AnalysisClient {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            http: http_client()?,
        })
    }

    /// Single synchronous request; the timeout lives on the HTTP client.
    pub fn analyze(&self, transactions_text: &str) -> Result<String, AnalysisError> {
        let body = json!({
            "model": ANALYSIS_MODEL,
            "max_tokens": 2000,
            "temperature": 0.3,
            "system": SYSTEM_PROMPT,
            "messages": [{ "role": "user", "content": transactions_text }],
        });

        let resp = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .map_err(|e| AnalysisError::Other(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(classify_failure(status, &detail));
        }

        let parsed: MessagesResponse = resp
            .json()
            .map_err(|e| AnalysisError::Other(format!("Malformed response: {}", e)))?;
        parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AnalysisError::Other("Empty response content".to_string()))
    }
}

fn classify_failure(status: StatusCode, detail: &str) -> AnalysisError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AnalysisError::Authentication(format!("HTTP {}", status.as_u16()))
        }
        StatusCode::TOO_MANY_REQUESTS => AnalysisError::RateLimited,
        StatusCode::BAD_REQUEST if detail.contains("credit balance") => {
            AnalysisError::CreditExhausted
        }
        _ => AnalysisError::Other(format!(
            "HTTP {}: {}",
            status.as_u16(),
            detail.chars().take(200).collect::<String>()
        )),
    }
}

/// Render the cleaned dataset as the plain-text block the AI service
/// receives: a newest-first listing plus summary statistics.
pub fn format_for_analysis(rows: &[Transaction]) -> String {
    let mut sorted: Vec<&Transaction> = rows.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut text = String::from("TRANSACTION DATA:\n");
    text.push_str("Date | Description | Amount | Type\n");
    text.push_str(&"-".repeat(50));
    text.push('\n');
    for tx in &sorted {
        let _ = writeln!(
            text,
            "{} | {} | ${:.2} | {}",
            tx.date.format("%Y-%m-%d"),
            tx.description,
            tx.amount,
            tx.tx_type
        );
    }

    let breakdown = crate::breakdown::calculate(rows);
    let s = &breakdown.summary;
    let _ = write!(
        text,
        "\nSUMMARY STATISTICS:\n\
         Total Transactions: {}\n\
         Total Income: ${:.2}\n\
         Total Spent: ${:.2}\n\
         Net Cash Flow: ${:.2}\n",
        s.transaction_count, s.total_income, s.total_spent, s.net_flow
    );
    text
}

/// Deterministic analysis text computed purely from the breakdown, used
/// whenever the AI service is unavailable or no key is configured.
pub fn local_summary(breakdown: &Breakdown, file_info: &FileInfo) -> String {
    let s = &breakdown.summary;
    let mut text = String::new();
    let _ = writeln!(
        text,
        "Automated summary for {} ({} transactions, {}).",
        file_info.filename, file_info.transaction_count, file_info.date_range
    );
    let _ = writeln!(
        text,
        "Income {} against spending {} leaves a net cash flow of {}{}.",
        fmt_currency(s.total_income),
        fmt_currency(s.total_spent),
        if s.net_flow.is_sign_negative() { "-" } else { "" },
        fmt_currency(s.net_flow)
    );

    if breakdown.categories.is_empty() {
        let _ = writeln!(text, "\nNo categorized spending found in this period.");
    } else {
        let _ = writeln!(text, "\nTop spending categories:");
        for row in breakdown.categories.iter().take(3) {
            let _ = writeln!(
                text,
                "- {}: {} across {} transactions (avg {}, {} of spending)",
                row.name,
                fmt_currency(row.total),
                row.count,
                fmt_currency(row.average),
                fmt_percentage(row.percentage)
            );
        }
    }

    if s.net_flow.is_sign_negative() {
        let _ = writeln!(
            text,
            "\nSpending exceeded income this period; the largest category above is the first place to look for savings."
        );
    } else {
        let _ = writeln!(
            text,
            "\nIncome covered spending this period; consider directing the surplus toward savings."
        );
    }
    let _ = writeln!(
        text,
        "\n(AI analysis was unavailable; this summary was generated locally.)"
    );
    text
}
