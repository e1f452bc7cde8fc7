use super::EnvError;
use std::collections::BTreeMap;
use std::env;

/// Session-owned copy of the environment. Builtins mutate this table, never
/// the process environment; children receive a snapshot of it at spawn time,
/// so a mutation is visible to every child spawned afterwards and to none
/// spawned before.
#[derive(Clone, Debug, Default)]
pub struct EnvTable {
    vars: BTreeMap<String, String>,
}

impl EnvTable {
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Returns whether the variable was present.
    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
