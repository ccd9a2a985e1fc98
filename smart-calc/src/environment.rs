use std::collections::HashMap;

use num_bigint::BigInt;

/// Named integer variables of one session.
///
/// Values are owned, so assigning one variable from another copies the value.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, BigInt>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Inserts or overwrites a variable.
    pub fn set(&mut self, name: impl Into<String>, value: BigInt) {
        self.variables.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables sorted by name.
    pub fn sorted(&self) -> Vec<(&str, &BigInt)> {
        let mut vars: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }
}
