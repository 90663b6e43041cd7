// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

use idream::models::{Transaction, TxKind};
use idream::store::Store;
use idream::{cli, commands::exporter};

fn store_with_one_tx(dir: &std::path::Path) -> Store {
    let mut store = Store::open_at(dir);
    store.transactions.push(Transaction {
        id: 42,
        kind: TxKind::Expense,
        amount: Decimal::from(-1234),
        description: "Weekly oil run".to_string(),
        category_id: 1,
        product: None,
        date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        created_at: Utc::now(),
    });
    store
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["idream", "export", "transactions"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    export_m.clone()
}

#[test]
fn export_transactions_writes_pretty_json() {
    let dir = tempdir().unwrap();
    let store = store_with_one_tx(dir.path());
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["--format", "json", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 42,
                "date": "2025-01-02",
                "kind": "expense",
                "description": "Weekly oil run",
                "category": "Raw materials",
                "product": null,
                "amount": "-1234",
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv() {
    let dir = tempdir().unwrap();
    let store = store_with_one_tx(dir.path());
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["--format", "csv", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,kind,description,category,product,amount"
    );
    assert_eq!(
        lines.next().unwrap(),
        "42,2025-01-02,expense,Weekly oil run,Raw materials,,-1234"
    );
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let store = store_with_one_tx(dir.path());
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["--format", "xml", "--out", &out_str]);
    assert!(exporter::handle(&store, &m).is_err());
    assert!(!out_path.exists());
}
