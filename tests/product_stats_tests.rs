// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use idream::finance::{product_margin, recompute_product_stats};
use idream::models::{Product, Transaction, TxKind};

fn product(id: i64, name: &str, price: i64, cost: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: Decimal::from(price),
        cost: Decimal::from(cost),
        description: String::new(),
        sales: 0,
        revenue: Decimal::ZERO,
    }
}

fn sale(id: i64, product: &str, amount: i64) -> Transaction {
    let amount = Decimal::from(amount);
    Transaction {
        id,
        kind: if amount < Decimal::ZERO {
            TxKind::Expense
        } else {
            TxKind::Revenue
        },
        amount,
        description: format!("sale {}", id),
        category_id: 10,
        product: Some(product.to_string()),
        date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        created_at: Utc::now(),
    }
}

#[test]
fn stats_count_and_sum_matching_sales() {
    let mut products = vec![product(1, "Chips", 500, 200)];
    let txs = vec![sale(1, "Chips", 300), sale(2, "Chips", 200)];
    recompute_product_stats(&mut products, &txs);
    assert_eq!(products[0].sales, 2);
    assert_eq!(products[0].revenue, Decimal::from(500));
}

#[test]
fn renamed_product_no_longer_matches_history() {
    let mut products = vec![product(1, "ChipsV2", 500, 200)];
    let txs = vec![sale(1, "Chips", 300), sale(2, "Chips", 200)];
    recompute_product_stats(&mut products, &txs);
    assert_eq!(products[0].sales, 0);
    assert_eq!(products[0].revenue, Decimal::ZERO);
}

#[test]
fn join_is_case_sensitive() {
    let mut products = vec![product(1, "Chips", 500, 200)];
    let txs = vec![sale(1, "chips", 300)];
    recompute_product_stats(&mut products, &txs);
    assert_eq!(products[0].sales, 0);
}

#[test]
fn expenses_never_count_as_sales() {
    let mut products = vec![product(1, "Chips", 500, 200)];
    let txs = vec![sale(1, "Chips", 300), sale(2, "Chips", -100)];
    recompute_product_stats(&mut products, &txs);
    assert_eq!(products[0].sales, 1);
    assert_eq!(products[0].revenue, Decimal::from(300));
}

#[test]
fn recomputation_is_idempotent() {
    let mut products = vec![product(1, "Chips", 500, 200), product(2, "Popcorn", 300, 150)];
    let txs = vec![sale(1, "Chips", 300), sale(2, "Popcorn", 300)];
    recompute_product_stats(&mut products, &txs);
    let first: Vec<(u64, Decimal)> = products.iter().map(|p| (p.sales, p.revenue)).collect();
    recompute_product_stats(&mut products, &txs);
    let second: Vec<(u64, Decimal)> = products.iter().map(|p| (p.sales, p.revenue)).collect();
    assert_eq!(first, second);
}

#[test]
fn stale_cached_values_are_overwritten() {
    let mut products = vec![product(1, "Chips", 500, 200)];
    products[0].sales = 99;
    products[0].revenue = Decimal::from(123_456);
    recompute_product_stats(&mut products, &[]);
    assert_eq!(products[0].sales, 0);
    assert_eq!(products[0].revenue, Decimal::ZERO);
}

#[test]
fn margin_handles_a_zero_price() {
    let chips = product(1, "Chips", 500, 200);
    assert_eq!(product_margin(&chips), Decimal::from(60));
    let broken = product(2, "Broken", 0, 100);
    assert_eq!(product_margin(&broken), Decimal::ZERO);
}
