// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Category, Product, Settings, Transaction, default_categories};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "iDream", "idream"));

const TRANSACTIONS_KEY: &str = "transactions.json";
const PRODUCTS_KEY: &str = "products.json";
const CATEGORIES_KEY: &str = "categories.json";
const SETTINGS_KEY: &str = "settings.json";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// One key-value blob per collection, read once at startup and rewritten
/// wholesale after every mutating command. Single-process, last write wins.
pub struct Store {
    dir: PathBuf,
    pub transactions: Vec<Transaction>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub settings: Settings,
}

impl Store {
    pub fn open_default() -> Result<Store> {
        Ok(Store::open_at(data_dir()?))
    }

    /// A missing or unreadable key silently becomes its default, so a
    /// fresh or damaged data dir still opens with the seed categories.
    pub fn open_at(dir: impl Into<PathBuf>) -> Store {
        let dir = dir.into();
        Store {
            transactions: load_key(&dir.join(TRANSACTIONS_KEY)).unwrap_or_default(),
            products: load_key(&dir.join(PRODUCTS_KEY)).unwrap_or_default(),
            categories: load_key(&dir.join(CATEGORIES_KEY)).unwrap_or_else(default_categories),
            settings: load_key(&dir.join(SETTINGS_KEY)).unwrap_or_default(),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Rewrites every key from the in-memory state. No partial writes.
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Create data dir {}", self.dir.display()))?;
        write_key(&self.dir.join(TRANSACTIONS_KEY), &self.transactions)?;
        write_key(&self.dir.join(PRODUCTS_KEY), &self.products)?;
        write_key(&self.dir.join(CATEGORIES_KEY), &self.categories)?;
        write_key(&self.dir.join(SETTINGS_KEY), &self.settings)?;
        Ok(())
    }
}

fn load_key<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn write_key<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw).with_context(|| format!("Write {}", path.display()))?;
    Ok(())
}

/// A failed save is reported and the in-memory mutation stands; the user
/// retries by re-running the command.
pub fn save_or_warn(store: &Store) {
    if let Err(e) = store.save() {
        eprintln!("warning: data not persisted: {e:#}");
    }
}

/// Creation-time id, bumped past any already-taken value so ids are never
/// reused within a collection.
pub fn allocate_id(taken: &[i64]) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    while taken.contains(&id) {
        id += 1;
    }
    id
}
