// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::TxKind;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    println!("{}", report(store));
    Ok(())
}

/// Integrity sweep over the loaded data set. Pure so tests can assert on
/// the findings directly.
pub fn findings(store: &Store) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for t in &store.transactions {
        let sign_ok = match t.kind {
            TxKind::Expense => t.amount < Decimal::ZERO,
            TxKind::Revenue => t.amount > Decimal::ZERO,
        };
        if !sign_ok {
            rows.push(vec![
                "sign_kind_mismatch".to_string(),
                format!("tx {} is {} with amount {}", t.id, t.kind.as_str(), t.amount),
            ]);
        }
        if t.description.trim().is_empty() {
            rows.push(vec!["empty_description".to_string(), format!("tx {}", t.id)]);
        }
        if !store.categories.iter().any(|c| c.id == t.category_id) {
            rows.push(vec![
                "unknown_category".to_string(),
                format!("tx {} -> category {}", t.id, t.category_id),
            ]);
        }
        if let Some(name) = &t.product {
            if !store.products.iter().any(|p| &p.name == name) {
                rows.push(vec![
                    "dangling_product_link".to_string(),
                    format!("tx {} -> '{}'", t.id, name),
                ]);
            }
        }
    }

    // Duplicate names break the transaction->product join.
    let mut seen = HashSet::new();
    for p in &store.products {
        if !seen.insert(p.name.as_str()) {
            rows.push(vec!["duplicate_product_name".to_string(), p.name.clone()]);
        }
    }

    if store.settings.profit_split.validate().is_err() {
        rows.push(vec![
            "invalid_profit_split".to_string(),
            format!(
                "{} + {}",
                store.settings.profit_split.collaborators, store.settings.profit_split.treasury
            ),
        ]);
    }

    rows
}

fn report(store: &Store) -> String {
    let rows = findings(store);
    if rows.is_empty() {
        "✅ doctor: no issues found".to_string()
    } else {
        pretty_table(&["Issue", "Detail"], rows).to_string()
    }
}
