// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("finsum")
        .version(crate_version!())
        .about("Bank-transaction CSV validation, spending breakdown, and daily summary reports")
        .subcommand(
            Command::new("validate")
                .about("Check CSV structure and data quality without cleaning")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .required(true)
                        .help("Path to the transaction CSV"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the validation report as JSON"),
                ),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Clean the CSV and print the categorized spending breakdown")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .required(true)
                        .help("Path to the transaction CSV"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the breakdown as JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print category rows as JSON lines"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Run the full pipeline and save a markdown report")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .required(true)
                        .help("Path to the transaction CSV"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Directory for the saved report (defaults to the configured reports dir)"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Skip the AI service and use the locally generated summary"),
                ),
        )
}
