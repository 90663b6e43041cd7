// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Revenue,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Revenue => "revenue",
        }
    }
}

/// A single ledger entry. Amounts are signed: negative for expenses,
/// positive for revenue, and the sign must always match `kind`.
/// Entries are never mutated after creation, only deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TxKind,
    pub amount: Decimal,
    pub description: String,
    pub category_id: i64,
    /// Loose link to a product by name. Checked at creation time; `doctor`
    /// reports links that have gone dangling since.
    pub product: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: TxKind,
    pub color: String,
}

/// `sales` and `revenue` are a cached projection over the transaction log,
/// recomputed on every product render pass and written back. The persisted
/// values are never treated as authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub cost: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub revenue: Decimal,
}

/// Derived per-period figures. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    /// Percent; 0 when revenue is 0.
    pub profit_margin: Decimal,
    pub collaborators_share: Decimal,
    pub treasury_share: Decimal,
    pub revenue_trend: Decimal,
    pub expense_trend: Decimal,
    pub profit_trend: Decimal,
    /// Point difference against the baseline margin, not a percentage of it.
    pub margin_trend: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitSplit {
    pub collaborators: Decimal,
    pub treasury: Decimal,
}

impl Default for ProfitSplit {
    fn default() -> Self {
        ProfitSplit {
            collaborators: Decimal::new(45, 2),
            treasury: Decimal::new(55, 2),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("profit split ratios must be non-negative and sum to 1 (got {collaborators} + {treasury})")]
pub struct InvalidSplit {
    pub collaborators: Decimal,
    pub treasury: Decimal,
}

impl ProfitSplit {
    pub fn validate(&self) -> Result<(), InvalidSplit> {
        if self.collaborators < Decimal::ZERO
            || self.treasury < Decimal::ZERO
            || self.collaborators + self.treasury != Decimal::ONE
        {
            return Err(InvalidSplit {
                collaborators: self.collaborators,
                treasury: self.treasury,
            });
        }
        Ok(())
    }
}

/// Fixed reference figures that period trends are measured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendBaseline {
    pub revenue: Decimal,
    pub expenses: Decimal,
}

impl Default for TrendBaseline {
    fn default() -> Self {
        TrendBaseline {
            revenue: Decimal::from(150_000),
            expenses: Decimal::from(90_000),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: String,
    pub profit_split: ProfitSplit,
    pub trend_baseline: TrendBaseline,
    pub whatsapp_phone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: "FCFA".to_string(),
            profit_split: ProfitSplit::default(),
            trend_baseline: TrendBaseline::default(),
            whatsapp_phone: String::new(),
        }
    }
}

/// Seed set used when no persisted categories exist: 8 expense, 6 revenue.
pub fn default_categories() -> Vec<Category> {
    let seed: [(i64, &str, TxKind, &str); 14] = [
        (1, "Raw materials", TxKind::Expense, "#FF6B6B"),
        (2, "Packaging", TxKind::Expense, "#4ECDC4"),
        (3, "Production equipment", TxKind::Expense, "#45B7D1"),
        (4, "Delivery & transport", TxKind::Expense, "#96CEB4"),
        (5, "Marketing & advertising", TxKind::Expense, "#FFEAA7"),
        (6, "Team salaries", TxKind::Expense, "#DDA0DD"),
        (7, "Rent & utilities", TxKind::Expense, "#FFA07A"),
        (8, "Miscellaneous services", TxKind::Expense, "#20B2AA"),
        (9, "4-in-1 sales", TxKind::Revenue, "#6A0DAD"),
        (10, "Chips sales", TxKind::Revenue, "#8A2BE2"),
        (11, "Peanut sales", TxKind::Revenue, "#9370DB"),
        (12, "Popcorn sales", TxKind::Revenue, "#BA55D3"),
        (13, "Wholesale", TxKind::Revenue, "#DA70D6"),
        (14, "Retail", TxKind::Revenue, "#EE82EE"),
    ];
    seed.into_iter()
        .map(|(id, name, kind, color)| Category {
            id,
            name: name.to_string(),
            kind,
            color: color.to_string(),
        })
        .collect()
}
