use std::collections::HashSet;

/// Names declared so far in the single global namespace. Only presence is
/// tracked; values belong to the interpreter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    table: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            table: HashSet::new(),
        }
    }

    /// Returns `false` when the name was already declared.
    pub fn declare_var(&mut self, name: &str) -> bool {
        self.table.insert(name.to_string())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
