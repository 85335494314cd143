// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::analysis::{AnalysisClient, AnalysisError, format_for_analysis, local_summary};
use crate::breakdown::calculate;
use crate::config::Config;
use crate::models::FileInfo;
use crate::report;
use crate::utils::format_date_range;
use crate::validate::{clean_and_validate_data, load_csv};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("file").unwrap().trim();
    let offline = m.get_flag("offline");
    let out_dir: PathBuf = m
        .get_one::<String>("out")
        .map(|s| PathBuf::from(s.trim()))
        .unwrap_or_else(|| cfg.reports_dir.clone());

    let path = Path::new(path);
    let ds = load_csv(path)?;
    let cleaned = clean_and_validate_data(&ds)?;
    let breakdown = calculate(&cleaned);
    let file_info = file_info(path, &cleaned);

    let analysis = if offline {
        local_summary(&breakdown, &file_info)
    } else {
        match &cfg.api_key {
            None => {
                eprintln!("warning: ANTHROPIC_API_KEY not set; using local summary");
                local_summary(&breakdown, &file_info)
            }
            Some(key) => {
                let client = AnalysisClient::new(key, &cfg.endpoint)?;
                match client.analyze(&format_for_analysis(&cleaned)) {
                    Ok(text) => text,
                    Err(err) => {
                        report_service_failure(&err);
                        local_summary(&breakdown, &file_info)
                    }
                }
            }
        }
    };

    let rendered = report::render(&analysis, &breakdown, &file_info);
    let saved = report::save(&rendered, &out_dir)?;
    println!("Report saved to {}", saved.display());
    Ok(())
}

fn report_service_failure(err: &AnalysisError) {
    match err {
        AnalysisError::CreditExhausted => {
            eprintln!("warning: {}; top up at https://console.anthropic.com/", err)
        }
        AnalysisError::Authentication(_) => {
            eprintln!("warning: {}; check ANTHROPIC_API_KEY", err)
        }
        AnalysisError::RateLimited | AnalysisError::Other(_) => eprintln!("warning: {}", err),
    }
    eprintln!("warning: falling back to locally generated summary");
}

fn file_info(path: &Path, cleaned: &[crate::models::Transaction]) -> FileInfo {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let date_range = match (
        cleaned.iter().map(|t| t.date).min(),
        cleaned.iter().map(|t| t.date).max(),
    ) {
        (Some(start), Some(end)) => format_date_range(start, end),
        _ => "Unknown".to_string(),
    };
    FileInfo {
        filename,
        transaction_count: cleaned.len(),
        date_range,
    }
}
