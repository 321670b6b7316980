use std::collections::HashMap;

/// Variable store of a single interpreter run.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    values: HashMap<String, i64>,
}

impl Memory {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Last write wins.
    pub fn store(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn load(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }
}
