//! Keeps older config files usable: reports keys the current version expects
//! but the file lacks, and rewrites the file with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file of this version should have.
pub const EXPECTED_KEYS: [&str; 4] = [
    "data_file",
    "default_wage",
    "default_range_days",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Expected keys absent from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Adds the missing keys with their default values, preserving every value
/// (and unknown key) already present. Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        if !map.contains_key(key)
            && let Some(v) = defaults.get(key)
        {
            map.insert(Value::String(key.to_string()), v.clone());
            added.push(key);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&map)?)?;
        info(format!("Config migration added: {}", added.join(", ")));
    }

    Ok(added)
}
