// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde_json::json;

use crate::store::Store;
use crate::utils::category_name;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Oldest first for exports; ties keep entry order.
    let mut rows = store.transactions.clone();
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "kind",
                "description",
                "category",
                "product",
                "amount",
            ])?;
            for t in &rows {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    t.description.clone(),
                    category_name(&store.categories, t.category_id),
                    t.product.clone().unwrap_or_default(),
                    t.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = rows
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_string(),
                        "kind": t.kind.as_str(),
                        "description": t.description,
                        "category": category_name(&store.categories, t.category_id),
                        "product": t.product,
                        "amount": t.amount.to_string(),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
