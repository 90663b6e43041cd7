// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::models::Category;
use crate::store::{Store, allocate_id, save_or_warn};
use crate::utils::{parse_kind, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let mut cats = store.categories.clone();
            cats.sort_by(|a, b| a.name.cmp(&b.name));
            let rows = cats
                .into_iter()
                .map(|c| vec![c.name, c.kind.as_str().to_string(), c.color])
                .collect();
            println!("{}", pretty_table(&["Category", "Kind", "Color"], rows));
        }
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            let color = sub.get_one::<String>("color").unwrap().to_string();
            if name.is_empty() {
                return Err(anyhow!("Category name must not be empty"));
            }
            if store.categories.iter().any(|c| c.name == name) {
                return Err(anyhow!("Category '{}' already exists", name));
            }
            let taken: Vec<i64> = store.categories.iter().map(|c| c.id).collect();
            store.categories.push(Category {
                id: allocate_id(&taken),
                name: name.clone(),
                kind,
                color,
            });
            save_or_warn(store);
            println!("Added category '{}' ({})", name, kind.as_str());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let before = store.categories.len();
            store.categories.retain(|c| &c.name != name);
            if store.categories.len() == before {
                return Err(anyhow!("Category '{}' not found", name));
            }
            save_or_warn(store);
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
