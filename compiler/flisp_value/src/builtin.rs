//! Builtin function identities.
//!
//! A `Function` value refers to one of these variants. The set is fixed,
//! so dispatch is a `match` rather than a table of function pointers. The
//! implementations live in `flisp_eval`, which needs the environment.

use std::fmt;

/// A primitive operation, named by the symbol it is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // List functions
    Head,
    Tail,
    List,
    Init,
    Eval,
    Join,
    Cons,
    Len,
    Last,

    // Variable functions
    Def,

    // Mathematical functions
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Max,
    Min,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 18] = [
        Builtin::Head,
        Builtin::Tail,
        Builtin::List,
        Builtin::Init,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Cons,
        Builtin::Len,
        Builtin::Last,
        Builtin::Def,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::Pow,
        Builtin::Max,
        Builtin::Min,
    ];

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::List => "list",
            Builtin::Init => "init",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Cons => "cons",
            Builtin::Len => "len",
            Builtin::Last => "last",
            Builtin::Def => "def",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::Pow => "^",
            Builtin::Max => "max",
            Builtin::Min => "min",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
