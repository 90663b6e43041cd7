// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

use crate::models::ProfitSplit;
use crate::store::{Store, save_or_warn};
use crate::utils::{parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(store),
        Some(("set-split", sub)) => set_split(store, sub)?,
        Some(("set-baseline", sub)) => set_baseline(store, sub)?,
        Some(("set-phone", sub)) => {
            store.settings.whatsapp_phone = sub.get_one::<String>("phone").unwrap().to_string();
            save_or_warn(store);
            println!("WhatsApp phone set to {}", store.settings.whatsapp_phone);
        }
        Some(("set-currency", sub)) => {
            store.settings.currency = sub.get_one::<String>("currency").unwrap().to_string();
            save_or_warn(store);
            println!("Currency label set to {}", store.settings.currency);
        }
        _ => {}
    }
    Ok(())
}

fn show(store: &Store) {
    let s = &store.settings;
    let rows = vec![
        vec!["currency".to_string(), s.currency.clone()],
        vec![
            "profit split (collaborators)".to_string(),
            s.profit_split.collaborators.to_string(),
        ],
        vec![
            "profit split (treasury)".to_string(),
            s.profit_split.treasury.to_string(),
        ],
        vec![
            "trend baseline revenue".to_string(),
            s.trend_baseline.revenue.to_string(),
        ],
        vec![
            "trend baseline expenses".to_string(),
            s.trend_baseline.expenses.to_string(),
        ],
        vec!["whatsapp phone".to_string(), s.whatsapp_phone.clone()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}

fn set_split(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let split = ProfitSplit {
        collaborators: parse_decimal(sub.get_one::<String>("collaborators").unwrap())?,
        treasury: parse_decimal(sub.get_one::<String>("treasury").unwrap())?,
    };
    split.validate()?;
    store.settings.profit_split = split;
    save_or_warn(store);
    println!(
        "Profit split set to {}/{}",
        store.settings.profit_split.collaborators, store.settings.profit_split.treasury
    );
    Ok(())
}

fn set_baseline(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let revenue = parse_decimal(sub.get_one::<String>("revenue").unwrap())?;
    let expenses = parse_decimal(sub.get_one::<String>("expenses").unwrap())?;
    if revenue < Decimal::ZERO || expenses < Decimal::ZERO {
        return Err(anyhow!("Baseline figures must not be negative"));
    }
    store.settings.trend_baseline.revenue = revenue;
    store.settings.trend_baseline.expenses = expenses;
    save_or_warn(store);
    println!("Trend baseline set to revenue {} / expenses {}", revenue, expenses);
    Ok(())
}
