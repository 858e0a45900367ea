use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A named entry of an assembler symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A symbol bound to a value; the only kind an identifier evaluates to.
    Value(Value),
    /// A symbol that names a scope (for example the left side of `a.b`) and
    /// has no value of its own.
    Scope,
}

/// Read-only access to a symbol table.
pub trait SymbolLookup {
    /// Looks a symbol up by its full name.
    fn lookup(&self, name: &str) -> Option<Symbol>;
}

impl SymbolLookup for HashMap<String, Symbol> {
    fn lookup(&self, name: &str) -> Option<Symbol> {
        self.get(name).cloned()
    }
}
