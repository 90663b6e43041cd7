// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use idream::period::Period;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn today_is_a_single_day() {
    let (start, end) = Period::Today.resolve(d("2024-03-15")).unwrap();
    assert_eq!(start, d("2024-03-15"));
    assert_eq!(end, d("2024-03-15"));
}

#[test]
fn week_runs_sunday_through_saturday() {
    // 2024-03-15 is a Friday
    let (start, end) = Period::Week.resolve(d("2024-03-15")).unwrap();
    assert_eq!(start, d("2024-03-10"));
    assert_eq!(end, d("2024-03-16"));
}

#[test]
fn week_starting_on_the_reference_sunday() {
    let (start, end) = Period::Week.resolve(d("2024-03-10")).unwrap();
    assert_eq!(start, d("2024-03-10"));
    assert_eq!(end, d("2024-03-16"));
}

#[test]
fn week_may_cross_a_month_boundary() {
    // 2024-03-31 is a Sunday, so its week runs into April
    let (start, end) = Period::Week.resolve(d("2024-03-31")).unwrap();
    assert_eq!(start, d("2024-03-31"));
    assert_eq!(end, d("2024-04-06"));
}

#[test]
fn month_spans_first_through_last_day() {
    let (start, end) = Period::Month.resolve(d("2024-03-15")).unwrap();
    assert_eq!(start, d("2024-03-01"));
    assert_eq!(end, d("2024-03-31"));
}

#[test]
fn month_honors_leap_february() {
    let (_, end) = Period::Month.resolve(d("2024-02-15")).unwrap();
    assert_eq!(end, d("2024-02-29"));
    let (_, end) = Period::Month.resolve(d("2023-02-15")).unwrap();
    assert_eq!(end, d("2023-02-28"));
}

#[test]
fn quarter_is_the_three_month_block() {
    let (start, end) = Period::Quarter.resolve(d("2024-03-15")).unwrap();
    assert_eq!(start, d("2024-01-01"));
    assert_eq!(end, d("2024-03-31"));

    let (start, end) = Period::Quarter.resolve(d("2024-11-05")).unwrap();
    assert_eq!(start, d("2024-10-01"));
    assert_eq!(end, d("2024-12-31"));
}

#[test]
fn year_spans_the_calendar_year() {
    let (start, end) = Period::Year.resolve(d("2024-03-15")).unwrap();
    assert_eq!(start, d("2024-01-01"));
    assert_eq!(end, d("2024-12-31"));
}

#[test]
fn unrecognized_period_falls_back_to_month() {
    assert_eq!(Period::from_arg("fortnight"), Period::Month);
    assert_eq!(Period::from_arg(""), Period::Month);
    // recognized values are case-insensitive
    assert_eq!(Period::from_arg("WEEK"), Period::Week);
    assert_eq!(Period::from_arg("Year"), Period::Year);
}
