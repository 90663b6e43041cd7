// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::finance::{product_margin, recompute_product_stats};
use crate::models::Product;
use crate::store::{Store, allocate_id, save_or_warn};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let price = crate::utils::parse_decimal(sub.get_one::<String>("price").unwrap())?;
    let cost = crate::utils::parse_decimal(sub.get_one::<String>("cost").unwrap())?;
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let allow_loss = sub.get_flag("allow-loss");

    if name.is_empty() {
        return Err(anyhow!("Product name must not be empty"));
    }
    if price <= Decimal::ZERO || cost <= Decimal::ZERO {
        return Err(anyhow!("Price and cost must be greater than 0"));
    }
    // Transactions join on the name, so it has to be unambiguous.
    if store.products.iter().any(|p| p.name == name) {
        return Err(anyhow!("Product '{}' already exists", name));
    }
    if cost > price && !allow_loss {
        return Err(anyhow!(
            "Cost {} exceeds price {}; pass --allow-loss to add anyway",
            cost,
            price
        ));
    }

    let taken: Vec<i64> = store.products.iter().map(|p| p.id).collect();
    store.products.push(Product {
        id: allocate_id(&taken),
        name: name.clone(),
        price,
        cost,
        description,
        sales: 0,
        revenue: Decimal::ZERO,
    });
    save_or_warn(store);
    println!(
        "Added product '{}' (price {}, cost {})",
        name,
        fmt_money(&price, &store.settings),
        fmt_money(&cost, &store.settings)
    );
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let before = store.products.len();
    store.products.retain(|p| &p.name != name);
    if store.products.len() == before {
        return Err(anyhow!("Product '{}' not found", name));
    }
    save_or_warn(store);
    println!("Removed product '{}'", name);
    Ok(())
}

#[derive(Serialize)]
pub struct ProductRow {
    pub name: String,
    pub price: String,
    pub cost: String,
    pub margin_pct: String,
    pub sales: u64,
    pub revenue: String,
    pub description: String,
}

fn list(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // Refresh the cached projection and persist it alongside the catalog.
    recompute_product_stats(&mut store.products, &store.transactions);
    save_or_warn(store);

    let s = &store.settings;
    let rows: Vec<ProductRow> = store
        .products
        .iter()
        .map(|p| ProductRow {
            name: p.name.clone(),
            price: fmt_money(&p.price, s),
            cost: fmt_money(&p.cost, s),
            margin_pct: format!("{:.1}", product_margin(p)),
            sales: p.sales,
            revenue: fmt_money(&p.revenue, s),
            description: p.description.clone(),
        })
        .collect();

    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.price.clone(),
                r.cost.clone(),
                format!("{}%", r.margin_pct),
                r.sales.to_string(),
                r.revenue.clone(),
                r.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Product",
                "Price",
                "Cost",
                "Margin",
                "Sales",
                "Revenue",
                "Description",
            ],
            table,
        )
    );

    if let Some(top) = store.products.iter().max_by_key(|p| p.revenue) {
        println!(
            "Most profitable: {} ({})",
            top.name,
            fmt_money(&top.revenue, s)
        );
    }
    if let Some(best) = store
        .products
        .iter()
        .max_by_key(|p| product_margin(p))
    {
        println!("Best margin: {} ({:.1}%)", best.name, product_margin(best));
    }
    Ok(())
}
