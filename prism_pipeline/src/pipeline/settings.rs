//! Per-pipeline tunable settings
//!
//! A pipeline factory registers the knobs its passes understand (reflection
//! toggles, sample counts, ...) with defaults and, for integers, a clamping
//! range. Readers get the default until a value is set; unregistered keys
//! are rejected instead of faulting at frame time.

use rustc_hash::FxHashMap;

use crate::error::Result;

#[derive(Debug, Clone)]
struct BoolSetting {
    default: bool,
    value: Option<bool>,
}

#[derive(Debug, Clone)]
struct IntSetting {
    default: i32,
    min: i32,
    max: i32,
    value: Option<i32>,
}

/// Registry of named boolean and integer settings for one pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineSettings {
    bools: FxHashMap<String, BoolSetting>,
    ints: FxHashMap<String, IntSetting>,
}

impl PipelineSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a boolean setting with its default value
    pub fn register_bool(&mut self, key: &str, default: bool) {
        self.bools.insert(key.to_string(), BoolSetting { default, value: None });
    }

    /// Register an integer setting with its default and clamping range
    pub fn register_int(&mut self, key: &str, default: i32, min: i32, max: i32) {
        self.ints.insert(
            key.to_string(),
            IntSetting { default, min, max, value: None },
        );
    }

    /// Read a boolean setting (default until set)
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.bools.get(key) {
            Some(setting) => Ok(setting.value.unwrap_or(setting.default)),
            None => crate::render_bail!(
                "prism::PipelineSettings",
                "boolean setting '{}' is not registered",
                key
            ),
        }
    }

    /// Write a boolean setting
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        match self.bools.get_mut(key) {
            Some(setting) => {
                setting.value = Some(value);
                Ok(())
            }
            None => crate::render_bail!(
                "prism::PipelineSettings",
                "boolean setting '{}' is not registered",
                key
            ),
        }
    }

    /// Read an integer setting, clamped to its registered range
    pub fn get_int(&self, key: &str) -> Result<i32> {
        match self.ints.get(key) {
            Some(setting) => {
                let value = setting.value.unwrap_or(setting.default);
                Ok(value.clamp(setting.min, setting.max))
            }
            None => crate::render_bail!(
                "prism::PipelineSettings",
                "integer setting '{}' is not registered",
                key
            ),
        }
    }

    /// Write an integer setting; the stored value is clamped to the
    /// registered range
    pub fn set_int(&mut self, key: &str, value: i32) -> Result<()> {
        match self.ints.get_mut(key) {
            Some(setting) => {
                setting.value = Some(value.clamp(setting.min, setting.max));
                Ok(())
            }
            None => crate::render_bail!(
                "prism::PipelineSettings",
                "integer setting '{}' is not registered",
                key
            ),
        }
    }

    /// All registered setting keys (unordered)
    pub fn keys(&self) -> Vec<&str> {
        self.bools
            .keys()
            .chain(self.ints.keys())
            .map(String::as_str)
            .collect()
    }

    /// Number of registered settings
    pub fn len(&self) -> usize {
        self.bools.len() + self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bools.is_empty() && self.ints.is_empty()
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
