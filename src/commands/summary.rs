// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;

use crate::finance::calculate_financials;
use crate::period::Period;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let period = Period::from_arg(
        m.get_one::<String>("period")
            .map(String::as_str)
            .unwrap_or("month"),
    );
    let today = Local::now().date_naive();
    let summary = calculate_financials(&store.transactions, period, today, &store.settings)?;

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let s = &store.settings;
    println!("Period: {}", period.as_str());
    let rows = vec![
        vec![
            "Revenue".to_string(),
            fmt_money(&summary.total_revenue, s),
            trend_line(summary.revenue_trend, false),
        ],
        vec![
            "Expenses".to_string(),
            fmt_money(&summary.total_expenses, s),
            trend_line(summary.expense_trend, false),
        ],
        vec![
            "Net profit".to_string(),
            fmt_money(&summary.net_profit, s),
            trend_line(summary.profit_trend, false),
        ],
        vec![
            "Margin".to_string(),
            format!("{:.1}%", summary.profit_margin),
            trend_line(summary.margin_trend, true),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount", "Trend"], rows));

    println!(
        "Collaborators share ({}%): {}",
        (s.profit_split.collaborators * Decimal::ONE_HUNDRED).normalize(),
        fmt_money(&summary.collaborators_share, s)
    );
    println!(
        "Treasury share ({}%): {}",
        (s.profit_split.treasury * Decimal::ONE_HUNDRED).normalize(),
        fmt_money(&summary.treasury_share, s)
    );
    Ok(())
}

/// The dashboard trend caption: margin deltas are absolute points, the
/// rest are percentages of the baseline.
pub fn trend_line(value: Decimal, margin_points: bool) -> String {
    let unit = if margin_points { "pts" } else { "%" };
    if value > Decimal::ZERO {
        format!("+{:.1}{} vs previous period", value, unit)
    } else if value < Decimal::ZERO {
        format!("{:.1}{} vs previous period", value, unit)
    } else {
        "Stable vs previous period".to_string()
    }
}
