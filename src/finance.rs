// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, FinancialSummary, Product, Settings, Transaction, TxKind};
use crate::period::Period;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("unknown category id {0}")]
    UnknownCategory(i64),
    #[error("unknown product '{0}'")]
    UnknownProduct(String),
}

/// Gate for new entries: rejected input leaves no partial state behind.
/// `amount` is the user-entered magnitude; the sign is derived from the
/// kind at construction so it can never disagree with it.
pub fn validate_new_transaction(
    amount: Decimal,
    description: &str,
    category_id: i64,
    product: Option<&str>,
    categories: &[Category],
    products: &[Product],
) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if !categories.iter().any(|c| c.id == category_id) {
        return Err(ValidationError::UnknownCategory(category_id));
    }
    if let Some(name) = product {
        if !products.iter().any(|p| p.name == name) {
            return Err(ValidationError::UnknownProduct(name.to_string()));
        }
    }
    Ok(())
}

/// Aggregates the transactions dated within `period` around `reference`
/// into the dashboard figures. The caller captures the reference date once;
/// nothing here reads the clock. Inputs are not mutated, and an empty
/// period yields an all-zero summary.
pub fn calculate_financials(
    transactions: &[Transaction],
    period: Period,
    reference: NaiveDate,
    settings: &Settings,
) -> Result<FinancialSummary> {
    let (start, end) = period.resolve(reference)?;
    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect();

    let total_revenue: Decimal = in_period
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();
    let total_expenses: Decimal = in_period
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .map(|t| -t.amount)
        .sum();
    let net_profit = total_revenue - total_expenses;
    let profit_margin = if total_revenue > Decimal::ZERO {
        net_profit / total_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    // Profit sharing applies to profits only; losses are not split.
    let distributable = net_profit.max(Decimal::ZERO);
    let collaborators_share = distributable * settings.profit_split.collaborators;
    let treasury_share = distributable * settings.profit_split.treasury;

    let base = &settings.trend_baseline;
    let base_profit = base.revenue - base.expenses;
    let base_margin = if base.revenue > Decimal::ZERO {
        base_profit / base.revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let profit_trend = if base_profit != Decimal::ZERO {
        (net_profit - base_profit) / base_profit.abs() * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Ok(FinancialSummary {
        total_revenue,
        total_expenses,
        net_profit,
        profit_margin,
        collaborators_share,
        treasury_share,
        revenue_trend: pct_delta(total_revenue, base.revenue),
        expense_trend: pct_delta(total_expenses, base.expenses),
        profit_trend,
        margin_trend: profit_margin - base_margin,
        transaction_count: in_period.len(),
    })
}

fn pct_delta(current: Decimal, baseline: Decimal) -> Decimal {
    if baseline > Decimal::ZERO {
        (current - baseline) / baseline * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

#[derive(Debug, Default, Clone)]
pub struct TransactionFilter {
    pub kind: Option<TxKind>,
    pub category_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Applies only the predicates that are set, newest date first.
/// Same-date entries keep their input order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.kind.is_none_or(|k| t.kind == k))
        .filter(|t| filter.category_id.is_none_or(|id| t.category_id == id))
        .filter(|t| filter.date.is_none_or(|d| t.date == d))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Overwrites every product's cached `sales`/`revenue` from the current
/// transaction log. The join is by exact name; a product whose name no
/// longer appears on any transaction drops to zero. Idempotent.
pub fn recompute_product_stats(products: &mut [Product], transactions: &[Transaction]) {
    for product in products.iter_mut() {
        let mut sales = 0u64;
        let mut revenue = Decimal::ZERO;
        for t in transactions {
            if t.amount > Decimal::ZERO && t.product.as_deref() == Some(product.name.as_str()) {
                sales += 1;
                revenue += t.amount;
            }
        }
        product.sales = sales;
        product.revenue = revenue;
    }
}

/// Gross margin percent of a product; 0 when the price is 0.
pub fn product_margin(product: &Product) -> Decimal {
    if product.price > Decimal::ZERO {
        (product.price - product.cost) / product.price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
