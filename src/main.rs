// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use idream::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::Store::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.save()?;
            println!("Data directory ready at {}", store.dir().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, sub)?,
        Some(("product", sub)) => commands::products::handle(&mut store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("share", sub)) => commands::share::handle(&store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
