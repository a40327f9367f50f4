// Translation context threaded through the recursive descent.

use crate::formula::config::SymbolTable;

/// State visible to a subtree while it is being translated.
///
/// A scope is a small `Copy` value passed down by argument. Overriding the
/// symbol table creates a new scope for the callee only, so the caller's
/// table is back in effect as soon as the call returns, whether it
/// succeeded or failed.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Scope<'a> {
    #[inline]
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// The active substitution table.
    #[inline]
    pub fn symbols(&self) -> &'a SymbolTable {
        self.symbols
    }

    /// A scope identical to this one but with a different symbol table.
    #[inline]
    pub fn with_symbols(self, symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }
}
