//! Builtin registry and argument access
//!
//! Builtins are plain functions registered by name in a
//! [`BuiltinRegistry`]. The statement interpreter looks callees up here
//! before consulting the component table, so a component can never
//! shadow a builtin. The registry is built once per compiler and never
//! changes mid-run; there is no runtime reflection.
//!
//! [`Args`] packages the parsed argument values of one call. Every
//! builtin parameter can be filled positionally or by name, which is why
//! the accessors take both an index and a key.

use std::collections::HashMap;

use crate::weave::builtins;
use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::values::Value;

/// The calling convention shared by every builtin.
pub type BuiltinFn = fn(&mut Context, &Args) -> Result<(), BuiltinError>;

/// The arguments of one statement call.
#[derive(Debug, Clone)]
pub struct Args {
    function: String,
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    pub fn new(
        function: impl Into<String>,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Self {
        Args {
            function: function.into(),
            positional,
            named,
        }
    }

    /// Name of the function being called, used in error messages.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    /// The value filling a parameter: positional slot first, then named.
    pub fn get(&self, index: usize, key: &str) -> Option<&Value> {
        self.positional
            .get(index)
            .or_else(|| self.named.iter().find(|(k, _)| k == key).map(|(_, v)| v))
    }

    /// Like [`Args::get`], but only when the value is set (truthy).
    pub fn truthy(&self, index: usize, key: &str) -> Option<&Value> {
        self.get(index, key).filter(|v| v.is_truthy())
    }

    pub fn required(&self, index: usize, key: &str) -> Result<&Value, BuiltinError> {
        self.get(index, key)
            .ok_or_else(|| self.error(format!("missing required argument: '{}'", key)))
    }

    /// Required parameter rendered to text.
    pub fn string(&self, index: usize, key: &str) -> Result<String, BuiltinError> {
        self.required(index, key).map(|v| v.to_string())
    }

    /// Optional parameter rendered to text, with a default.
    pub fn string_or(&self, index: usize, key: &str, default: &str) -> String {
        self.get(index, key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    /// Optional flag parameter, judged by truthiness.
    pub fn flag_or(&self, index: usize, key: &str, default: bool) -> bool {
        self.get(index, key).map(Value::is_truthy).unwrap_or(default)
    }

    /// Optional whole-number parameter used for arithmetic.
    pub fn count_or(&self, index: usize, key: &str, default: i64) -> Result<i64, BuiltinError> {
        match self.get(index, key) {
            Some(value) => value
                .as_int()
                .ok_or_else(|| self.error(format!("'{}' must be a whole number, got {}", key, value))),
            None => Ok(default),
        }
    }

    /// Optional numeric parameter used for arithmetic.
    pub fn number_or(&self, index: usize, key: &str, default: f64) -> Result<f64, BuiltinError> {
        match self.get(index, key) {
            Some(value) => value
                .as_number()
                .ok_or_else(|| self.error(format!("'{}' must be a number, got {}", key, value))),
            None => Ok(default),
        }
    }

    /// Required parameter used where a list is expected. Strings iterate
    /// per character and mappings iterate over their keys.
    pub fn items(&self, index: usize, key: &str) -> Result<Vec<Value>, BuiltinError> {
        let value = self.required(index, key)?;
        value
            .items()
            .ok_or_else(|| self.error(format!("'{}' must be a list, got {}", key, value)))
    }

    /// Optional list parameter; absent or unset values yield no items.
    pub fn items_or_empty(&self, index: usize, key: &str) -> Result<Vec<Value>, BuiltinError> {
        match self.get(index, key) {
            Some(value) if value.is_truthy() => value
                .items()
                .ok_or_else(|| self.error(format!("'{}' must be a list, got {}", key, value))),
            _ => Ok(Vec::new()),
        }
    }

    /// Build a [`BuiltinError`] carrying this call's function name.
    pub fn error(&self, message: impl Into<String>) -> BuiltinError {
        BuiltinError::new(self.function.clone(), message)
    }
}

/// Registry of every callable builtin, keyed by name.
pub struct BuiltinRegistry {
    builtins: HashMap<String, BuiltinFn>,
}

impl BuiltinRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltinRegistry {
            builtins: HashMap::new(),
        }
    }

    /// Create a registry with the full builtin catalog installed.
    pub fn with_defaults() -> Self {
        let mut registry = BuiltinRegistry::new();
        builtins::register_defaults(&mut registry);
        registry
    }

    /// Register a builtin under `name`. A repeated name replaces the
    /// earlier function.
    pub fn register(&mut self, name: &str, builtin: BuiltinFn) {
        self.builtins.insert(name.to_string(), builtin);
    }

    /// Look up a builtin by name.
    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.builtins.get(name).copied()
    }

    /// Whether a builtin with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Sorted names of all registered builtins.
    pub fn list_builtins(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builtins.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
