// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use idream::commands::report::recommendations;
use idream::commands::share::message_text;
use idream::commands::summary::trend_line;
use idream::models::{FinancialSummary, Product, Settings};
use idream::utils::percent_encode;

fn summary(revenue: i64, expenses: i64) -> FinancialSummary {
    let total_revenue = Decimal::from(revenue);
    let total_expenses = Decimal::from(expenses);
    let net_profit = total_revenue - total_expenses;
    let profit_margin = if total_revenue > Decimal::ZERO {
        net_profit / total_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    FinancialSummary {
        total_revenue,
        total_expenses,
        net_profit,
        profit_margin,
        collaborators_share: Decimal::ZERO,
        treasury_share: Decimal::ZERO,
        revenue_trend: Decimal::ZERO,
        expense_trend: Decimal::ZERO,
        profit_trend: Decimal::ZERO,
        margin_trend: Decimal::ZERO,
        transaction_count: 0,
    }
}

fn product(name: &str, price: i64, cost: i64) -> Product {
    Product {
        id: 1,
        name: name.to_string(),
        price: Decimal::from(price),
        cost: Decimal::from(cost),
        description: String::new(),
        sales: 0,
        revenue: Decimal::ZERO,
    }
}

#[test]
fn healthy_numbers_get_the_default_advice() {
    // margin 40%, expenses well under 70% of revenue
    let recs = recommendations(&summary(100_000, 60_000), &[]);
    assert_eq!(recs.len(), 2);
    assert!(recs[0].contains("on track"));
}

#[test]
fn weak_margin_and_losses_are_called_out() {
    // margin 10%
    let recs = recommendations(&summary(100_000, 90_000), &[]);
    assert!(recs.iter().any(|r| r.contains("profit margin")));
    assert!(recs.iter().any(|r| r.contains("operating expenses")));

    let recs = recommendations(&summary(50_000, 80_000), &[]);
    assert!(recs.iter().any(|r| r.contains("curb losses")));
}

#[test]
fn low_margin_products_are_named() {
    // 10% product margin is below the 20% bar
    let products = vec![product("Chips", 500, 450), product("Popcorn", 300, 100)];
    let recs = recommendations(&summary(100_000, 60_000), &products);
    let about_products = recs
        .iter()
        .find(|r| r.contains("Revisit pricing"))
        .expect("pricing recommendation");
    assert!(about_products.contains("Chips"));
    assert!(!about_products.contains("Popcorn"));
}

#[test]
fn trend_captions_follow_the_sign() {
    assert_eq!(
        trend_line(Decimal::new(123, 1), false),
        "+12.3% vs previous period"
    );
    assert_eq!(
        trend_line(Decimal::new(-123, 1), false),
        "-12.3% vs previous period"
    );
    assert_eq!(trend_line(Decimal::ZERO, false), "Stable vs previous period");
    assert_eq!(
        trend_line(Decimal::from(3), true),
        "+3.0pts vs previous period"
    );
}

#[test]
fn share_message_carries_the_period_figures() {
    let settings = Settings::default();
    let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let msg = message_text(&summary(150_000, 90_000), &settings, date);
    assert!(msg.starts_with("Hello iDream Management,"));
    assert!(msg.contains("Financial report for 2025-03-15"));
    assert!(msg.contains("Revenue: 150 000 FCFA"));
    assert!(msg.contains("Total expenses: 90 000 FCFA"));
    assert!(msg.contains("Net profit: 60 000 FCFA"));
    assert!(msg.contains("Margin: 40.0%"));
}

#[test]
fn link_text_is_percent_encoded() {
    assert_eq!(percent_encode("a b\nc"), "a%20b%0Ac");
    assert_eq!(percent_encode("100%"), "100%25");
    assert_eq!(percent_encode("safe-_.~AZaz09"), "safe-_.~AZaz09");
}
