//! Driver options sources
//!
//! A host hands the driver a loosely typed bag of flag values. Drivers only
//! see it through [`DriverOptions`], so the same extraction code runs against
//! the command line, an options file, or an in-memory map in tests.

use crate::error::{FlagError, Result};
use crate::flag::Flag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed lookup of flag values by name
///
/// Every accessor returns `Ok(None)` when the source has no value for the
/// flag, and `Err` when it has one of an incompatible type.
pub trait DriverOptions {
    fn string(&self, name: &str) -> Result<Option<String>>;

    fn bool(&self, name: &str) -> Result<Option<bool>>;

    fn int(&self, name: &str) -> Result<Option<i64>>;

    fn string_list(&self, name: &str) -> Result<Option<Vec<String>>>;
}

/// A single flag value as supplied by a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    String(String),
    StringList(Vec<String>),
}

impl OptionValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::String(_) => "string",
            OptionValue::StringList(_) => "string list",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::StringList(value)
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(value: [&str; N]) -> Self {
        OptionValue::StringList(value.iter().map(|s| s.to_string()).collect())
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &OptionValue) -> FlagError {
    FlagError::TypeMismatch {
        flag: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

/// In-memory options source
///
/// Backs options files (a YAML mapping of flag name to value) and the
/// flag-default layer, and doubles as the fake host in tests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MapOptions {
    values: BTreeMap<String, OptionValue>,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a YAML mapping of flag name to value
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// The defaults a host applies for flags the user left unset
    pub fn from_flag_defaults(flags: &[Flag]) -> Self {
        flags.iter().fold(Self::new(), |opts, flag| {
            opts.with(flag.name, flag.default_value())
        })
    }

    /// Reject names that are not in `flags`
    pub fn check_known(&self, flags: &[Flag]) -> Result<()> {
        match self
            .values
            .keys()
            .find(|name| !flags.iter().any(|f| f.name == name.as_str()))
        {
            Some(unknown) => Err(FlagError::UnknownFlag(unknown.clone())),
            None => Ok(()),
        }
    }
}

impl DriverOptions for MapOptions {
    fn string(&self, name: &str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::String(s)) => Ok(Some(s.clone())),
            // YAML reads `image-id: 42` as an integer
            Some(OptionValue::Int(i)) => Ok(Some(i.to_string())),
            Some(other) => Err(mismatch(name, "string", other)),
        }
    }

    fn bool(&self, name: &str) -> Result<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Bool(b)) => Ok(Some(*b)),
            Some(value @ OptionValue::String(s)) => s
                .parse::<bool>()
                .map(Some)
                .map_err(|_| mismatch(name, "bool", value)),
            Some(other) => Err(mismatch(name, "bool", other)),
        }
    }

    fn int(&self, name: &str) -> Result<Option<i64>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Int(i)) => Ok(Some(*i)),
            Some(value @ OptionValue::String(s)) => s
                .parse::<i64>()
                .map(Some)
                .map_err(|_| mismatch(name, "int", value)),
            Some(other) => Err(mismatch(name, "int", other)),
        }
    }

    fn string_list(&self, name: &str) -> Result<Option<Vec<String>>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::StringList(list)) => Ok(Some(list.clone())),
            Some(OptionValue::String(s)) => Ok(Some(vec![s.clone()])),
            Some(other) => Err(mismatch(name, "string list", other)),
        }
    }
}

/// Options source that consults its layers in order
///
/// The first layer holding a value for a flag wins; a type error in a layer
/// is reported rather than skipped.
#[derive(Default)]
pub struct LayeredOptions<'a> {
    layers: Vec<&'a dyn DriverOptions>,
}

impl<'a> LayeredOptions<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer with lower precedence than the existing ones
    pub fn with(mut self, layer: &'a dyn DriverOptions) -> Self {
        self.layers.push(layer);
        self
    }

    fn first<T>(
        &self,
        name: &str,
        lookup: impl Fn(&dyn DriverOptions) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(value) = lookup(*layer)? {
                tracing::trace!(flag = name, layer = index, "flag resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl DriverOptions for LayeredOptions<'_> {
    fn string(&self, name: &str) -> Result<Option<String>> {
        self.first(name, |layer| layer.string(name))
    }

    fn bool(&self, name: &str) -> Result<Option<bool>> {
        self.first(name, |layer| layer.bool(name))
    }

    fn int(&self, name: &str) -> Result<Option<i64>> {
        self.first(name, |layer| layer.int(name))
    }

    fn string_list(&self, name: &str) -> Result<Option<Vec<String>>> {
        self.first(name, |layer| layer.string_list(name))
    }
}
