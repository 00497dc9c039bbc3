//! A single evaluation session.

use flisp_eval::{eval, read, Environment, Value};
use flisp_parse::{parse, ParseError};

/// Owns the environment for the lifetime of the read loop.
///
/// Definitions made through `def` persist across calls to `eval_source`.
pub struct Session {
    env: Environment,
}

impl Session {
    /// A session whose environment holds every builtin.
    pub fn new() -> Self {
        Session {
            env: Environment::with_builtins(),
        }
    }

    /// Parse `source`, read it into a value, and evaluate it.
    ///
    /// Only parse failures are `Err`; language errors come back as
    /// `Value::Error`.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, ParseError> {
        let tree = parse(source)?;
        let value = read(&tree);
        Ok(eval(&mut self.env, value))
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
