// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// Lossy parse: anything unrecognized falls over to month semantics.
    pub fn from_arg(s: &str) -> Period {
        match s.to_ascii_lowercase().as_str() {
            "today" => Period::Today,
            "week" => Period::Week,
            "quarter" => Period::Quarter,
            "year" => Period::Year,
            _ => Period::Month,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Inclusive `[start, end]` calendar bounds containing `reference`.
    /// Weeks start on Sunday; quarters are the Jan-Mar .. Oct-Dec blocks.
    pub fn resolve(self, reference: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        match self {
            Period::Today => Ok((reference, reference)),
            Period::Week => {
                let back = reference.weekday().num_days_from_sunday() as i64;
                let start = reference - Duration::days(back);
                Ok((start, start + Duration::days(6)))
            }
            Period::Month => month_bounds(reference.year(), reference.month()),
            Period::Quarter => {
                let first_month = (reference.month0() / 3) * 3 + 1;
                let (start, _) = month_bounds(reference.year(), first_month)?;
                let (_, end) = month_bounds(reference.year(), first_month + 2)?;
                Ok((start, end))
            }
            Period::Year => Ok((
                date(reference.year(), 1, 1)?,
                date(reference.year(), 12, 31)?,
            )),
        }
    }
}

/// First and last calendar day of the given month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let last_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow!("Invalid month number {}", month)),
    };
    Ok((date(year, month, 1)?, date(year, month, last_day)?))
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid calendar date {:04}-{:02}-{:02}", year, month, day))
}
