// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};

use crate::finance::calculate_financials;
use crate::models::{FinancialSummary, Settings};
use crate::period::Period;
use crate::store::Store;
use crate::utils::{fmt_money, percent_encode};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let period = Period::from_arg(
        m.get_one::<String>("period")
            .map(String::as_str)
            .unwrap_or("month"),
    );
    let phone = m
        .get_one::<String>("phone")
        .cloned()
        .unwrap_or_else(|| store.settings.whatsapp_phone.clone());
    if phone.is_empty() {
        bail!("No phone number configured; pass --phone or run 'idream settings set-phone'");
    }

    let today = Local::now().date_naive();
    let summary = calculate_financials(&store.transactions, period, today, &store.settings)?;
    let message = message_text(&summary, &store.settings, today);
    println!("https://wa.me/{}?text={}", phone, percent_encode(&message));
    Ok(())
}

/// The fixed message template sent to management.
pub fn message_text(summary: &FinancialSummary, settings: &Settings, date: NaiveDate) -> String {
    format!(
        "Hello iDream Management,\n\n\
         Financial report for {}:\n\n\
         Revenue: {}\n\
         Total expenses: {}\n\
         Net profit: {}\n\
         Margin: {:.1}%\n\n\
         Key points to discuss.\n\n\
         Regards,\n\
         Finance Desk",
        date,
        fmt_money(&summary.total_revenue, settings),
        fmt_money(&summary.total_expenses, settings),
        fmt_money(&summary.net_profit, settings),
        summary.profit_margin
    )
}
