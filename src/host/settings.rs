use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, SettingsError};

/// Settings snapshot handed to a source on create and update
///
/// Holds two layers: explicit user values and defaults registered by the
/// source. Reads fall back from the user layer to the defaults layer, and
/// then to the zero value of the requested type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Values explicitly set by the user
    #[serde(default)]
    values: BTreeMap<String, SettingValue>,

    /// Values registered through the defaults entry point
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    defaults: BTreeMap<String, SettingValue>,
}

/// A single typed setting value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Double(f64),
}

impl SettingValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            SettingValue::Double(d) => Some(*d as i64),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            SettingValue::Double(d) => Some(*d),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Double(value)
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from TOML text
    ///
    /// A bare table of key/value pairs is read as user values, so a settings
    /// file can be written by hand without the `values` wrapper.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if let Ok(settings) = toml::from_str::<Settings>(content) {
            if !settings.values.is_empty() || !settings.defaults.is_empty() {
                return Ok(settings);
            }
        }

        let values: BTreeMap<String, SettingValue> = toml::from_str(content)
            .map_err(|e| SettingsError::ParseFailed { reason: e.to_string() })?;
        Ok(Self {
            values,
            defaults: BTreeMap::new(),
        })
    }

    /// Serialize the snapshot to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::SerializeFailed { reason: e.to_string() }.into())
    }

    fn lookup(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }

    /// Set a user value
    pub fn set<K: Into<String>, V: Into<SettingValue>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`Settings::set`]
    pub fn with<K: Into<String>, V: Into<SettingValue>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    pub fn set_default_int(&mut self, key: &str, value: i64) {
        self.defaults.insert(key.to_string(), SettingValue::Int(value));
    }

    pub fn set_default_bool(&mut self, key: &str, value: bool) {
        self.defaults.insert(key.to_string(), SettingValue::Bool(value));
    }

    pub fn set_default_double(&mut self, key: &str, value: f64) {
        self.defaults.insert(key.to_string(), SettingValue::Double(value));
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.lookup(key).and_then(SettingValue::as_int).unwrap_or(0)
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.lookup(key).and_then(SettingValue::as_double).unwrap_or(0.0)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.lookup(key).and_then(SettingValue::as_bool).unwrap_or(false)
    }

    /// Check whether a key has a user value
    pub fn has_user_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Check whether a key has a user value or a default
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Drop a user value so the default shows through again
    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Number of keys with a user value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
