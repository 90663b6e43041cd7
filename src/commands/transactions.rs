// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::finance::{self, TransactionFilter};
use crate::models::{Transaction, TxKind};
use crate::store::{Store, allocate_id, save_or_warn};
use crate::utils::{
    category_name, fmt_money, id_for_category, maybe_print_json, parse_date, parse_decimal,
    parse_kind, pretty_table,
};

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
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub
        .get_one::<String>("description")
        .unwrap()
        .trim()
        .to_string();
    let category = sub.get_one::<String>("category").unwrap();
    let product = sub.get_one::<String>("product").map(|s| s.to_string());

    let category_id = id_for_category(&store.categories, category)?;
    finance::validate_new_transaction(
        amount,
        &description,
        category_id,
        product.as_deref(),
        &store.categories,
        &store.products,
    )?;

    let signed = match kind {
        TxKind::Expense => -amount,
        TxKind::Revenue => amount,
    };
    let taken: Vec<i64> = store.transactions.iter().map(|t| t.id).collect();
    store.transactions.push(Transaction {
        id: allocate_id(&taken),
        kind,
        amount: signed,
        description: description.clone(),
        category_id,
        product,
        date,
        created_at: Utc::now(),
    });
    save_or_warn(store);
    println!(
        "Recorded {} of {} on {} ({})",
        kind.as_str(),
        fmt_money(&amount, &store.settings),
        date,
        description
    );
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let before = store.transactions.len();
    store.transactions.retain(|t| t.id != id);
    if store.transactions.len() == before {
        return Err(anyhow!("Transaction {} not found", id));
    }
    save_or_warn(store);
    println!("Deleted transaction {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
}

/// Filtered, newest-first rows for `tx list`; split out so tests can drive
/// it through the parsed CLI matches.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut filter = TransactionFilter::default();
    if let Some(k) = sub.get_one::<String>("kind") {
        filter.kind = Some(parse_kind(k)?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        filter.category_id = Some(id_for_category(&store.categories, c)?);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        filter.date = Some(parse_date(d)?);
    }
    let mut rows = finance::filter_transactions(&store.transactions, &filter);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;

    let rows: Vec<TransactionRow> = data
        .iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            description: t.description.clone(),
            category: category_name(&store.categories, t.category_id),
            kind: t.kind.as_str().to_string(),
            amount: fmt_money(&t.amount.abs(), &store.settings),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Kind", "Amount"],
                table,
            )
        );
        let revenue: Decimal = data
            .iter()
            .filter(|t| t.amount > Decimal::ZERO)
            .map(|t| t.amount)
            .sum();
        let expenses: Decimal = data
            .iter()
            .filter(|t| t.amount < Decimal::ZERO)
            .map(|t| -t.amount)
            .sum();
        println!(
            "Revenue {} | Expenses {} | Balance {}",
            fmt_money(&revenue, &store.settings),
            fmt_money(&expenses, &store.settings),
            fmt_money(&(revenue - expenses), &store.settings)
        );
    }
    Ok(())
}
