// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Runtime configuration, built once in main and passed through the
/// pipeline rather than read from ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is not fatal: analysis degrades to the local summary.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub reports_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_key = match env::var("ANTHROPIC_API_KEY") {
            Ok(key) if key.trim().is_empty() => None,
            Ok(key) => {
                let key = key.trim().to_string();
                if key.len() < 20 {
                    return Err(anyhow!(
                        "ANTHROPIC_API_KEY appears to be invalid (too short).\n\
                         Get a key from https://console.anthropic.com/ and export it:\n\
                         export ANTHROPIC_API_KEY=your_api_key_here"
                    ));
                }
                Some(key)
            }
            Err(_) => None,
        };

        let endpoint = env::var("FINSUM_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let reports_dir = match env::var("FINSUM_REPORTS_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_reports_dir()?,
        };

        Ok(Config {
            api_key,
            endpoint,
            reports_dir,
        })
    }
}

fn default_reports_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com.finsum", "Finsum", "finsum")
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("reports"))
}
