//! Global environment: symbol name to owned value.
//!
//! The environment is flat. There is exactly one, created at startup and
//! passed by `&mut` into evaluation. Values are copied in on `define` and
//! copied out on `lookup`, so nothing held here aliases a value that is
//! still being evaluated.

use rustc_hash::FxHashMap;

use flisp_value::{unbound_symbol, Builtin, Value};

/// A single binding.
#[derive(Clone, Debug)]
struct Binding {
    name: String,
    value: Value,
}

/// Name to value table.
///
/// Bindings are kept in definition order; the index maps each name to its
/// slot so lookup does not scan.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    index: FxHashMap<String, usize>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create an environment with every builtin registered.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        env.register_default_builtins();
        env
    }

    /// Bind each builtin's name to its function value.
    pub fn register_default_builtins(&mut self) {
        for builtin in Builtin::ALL {
            self.define(builtin.name(), &Value::function(builtin));
        }
    }

    /// Bind `name` to a copy of `value`, replacing any existing binding.
    pub fn define(&mut self, name: &str, value: &Value) {
        tracing::trace!(name, "define");
        let value = value.clone();
        if let Some(&slot) = self.index.get(name) {
            self.bindings[slot].value = value;
            return;
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value,
        });
    }

    /// A copy of the value bound to `name`, or an unbound-symbol error value.
    pub fn lookup(&self, name: &str) -> Value {
        match self.get(name) {
            Some(value) => value.clone(),
            None => unbound_symbol(name).into(),
        }
    }

    /// Borrow the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.bindings[slot].value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|b| (b.name.as_str(), &b.value))
    }
}
