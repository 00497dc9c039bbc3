//! Owned children of a list value.

use std::ops::{Deref, DerefMut};

use flisp_stack::ensure_sufficient_stack;

use super::Value;

/// The children of an `SExpr` or `QExpr`.
///
/// Derefs to `Vec<Value>`. Dropping releases nested lists with an explicit
/// work list instead of recursing, and `Clone`/`PartialEq` recurse under the
/// stack guard, so values of any nesting depth can be copied, compared and
/// freed.
#[derive(Debug, Default)]
pub struct Cells(Vec<Value>);

impl Cells {
    #[inline]
    pub fn new() -> Self {
        Cells(Vec::new())
    }

    /// Take the children out, leaving this list empty.
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Value>> for Cells {
    fn from(cells: Vec<Value>) -> Self {
        Cells(cells)
    }
}

impl Deref for Cells {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for Cells {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl Clone for Cells {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Cells(self.0.clone()))
    }
}

impl PartialEq for Cells {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.0 == other.0)
    }
}

impl Eq for Cells {}

impl Drop for Cells {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(value) = pending.pop() {
            if let Value::SExpr(mut cells) | Value::QExpr(mut cells) = value {
                pending.append(&mut cells.0);
            }
        }
    }
}
