// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;

use crate::finance::{self, calculate_financials, product_margin};
use crate::models::{FinancialSummary, Product};
use crate::period::Period;
use crate::store::Store;
use crate::utils::{category_name, fmt_money, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let period = Period::from_arg(
        m.get_one::<String>("period")
            .map(String::as_str)
            .unwrap_or("month"),
    );
    let today = Local::now().date_naive();
    let summary = calculate_financials(&store.transactions, period, today, &store.settings)?;
    let s = &store.settings;

    println!("iDream financial report — {} ({})", today, period.as_str());
    println!();
    let overview = vec![
        vec!["Revenue".to_string(), fmt_money(&summary.total_revenue, s)],
        vec!["Expenses".to_string(), fmt_money(&summary.total_expenses, s)],
        vec!["Net profit".to_string(), fmt_money(&summary.net_profit, s)],
        vec!["Margin".to_string(), format!("{:.1}%", summary.profit_margin)],
        vec![
            "Transactions".to_string(),
            summary.transaction_count.to_string(),
        ],
        vec![
            "Collaborators share".to_string(),
            fmt_money(&summary.collaborators_share, s),
        ],
        vec![
            "Treasury share".to_string(),
            fmt_money(&summary.treasury_share, s),
        ],
    ];
    println!("{}", pretty_table(&["Overview", "Value"], overview));

    // Largest expenses across the whole log, like the monthly report page.
    let mut expenses: Vec<_> = store
        .transactions
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .collect();
    expenses.sort_by(|a, b| a.amount.cmp(&b.amount));
    if !expenses.is_empty() {
        let rows = expenses
            .iter()
            .take(5)
            .map(|t| {
                vec![
                    t.description.clone(),
                    category_name(&store.categories, t.category_id),
                    fmt_money(&t.amount.abs(), s),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Top expense", "Category", "Amount"], rows)
        );
    }

    // Per-category net over the whole log; silent categories are skipped.
    let mut breakdown = Vec::new();
    for c in &store.categories {
        let matching: Vec<_> = store
            .transactions
            .iter()
            .filter(|t| t.category_id == c.id)
            .collect();
        if matching.is_empty() {
            continue;
        }
        let net: Decimal = matching.iter().map(|t| t.amount).sum();
        breakdown.push(vec![
            c.name.clone(),
            fmt_money(&net.abs(), s),
            matching.len().to_string(),
        ]);
    }
    if !breakdown.is_empty() {
        println!(
            "{}",
            pretty_table(&["Category", "Net", "Transactions"], breakdown)
        );
    }

    // Product performance over refreshed stats; the stored projection is
    // not trusted here.
    let mut products = store.products.clone();
    finance::recompute_product_stats(&mut products, &store.transactions);
    if !products.is_empty() {
        let rows = products
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    format!("{:.1}%", product_margin(p)),
                    p.sales.to_string(),
                    fmt_money(&p.revenue, s),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Product", "Margin", "Sales", "Revenue"], rows)
        );
    }

    println!("Recommendations:");
    for rec in recommendations(&summary, &products) {
        println!("  - {}", rec);
    }
    Ok(())
}

/// Strategic pointers derived from the summary and product margins.
pub fn recommendations(summary: &FinancialSummary, products: &[Product]) -> Vec<String> {
    let mut recs = Vec::new();
    if summary.profit_margin < Decimal::from(15) {
        recs.push("Optimize production costs to improve the profit margin".to_string());
    }
    if summary.total_expenses > summary.total_revenue * Decimal::new(7, 1) {
        recs.push("Review operating expenses and identify savings".to_string());
    }
    if summary.net_profit < Decimal::ZERO {
        recs.push("Develop a strategy to grow revenue and curb losses".to_string());
    }
    let low_margin: Vec<&str> = products
        .iter()
        .filter(|p| product_margin(p) < Decimal::from(20))
        .map(|p| p.name.as_str())
        .collect();
    if !low_margin.is_empty() {
        recs.push(format!(
            "Revisit pricing or costs for: {}",
            low_margin.join(", ")
        ));
    }
    if recs.is_empty() {
        recs.push("Financial performance is on track; hold the current course".to_string());
        recs.push("Consider investments for future growth".to_string());
    }
    recs
}
