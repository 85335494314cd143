// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finsum::{cli, commands, config::Config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::load()?;

    match matches.subcommand() {
        Some(("validate", sub)) => commands::validate::handle(&cfg, sub)?,
        Some(("breakdown", sub)) => commands::breakdown::handle(&cfg, sub)?,
        Some(("analyze", sub)) => commands::analyze::handle(&cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
