//! Token Interner
//!
//! Step 1.0: assigns dense integer IDs to token address strings
//! (`spec.md` §4.1). IDs are insertion-ordered and stable for the lifetime
//! of a single run; there is no ordering guarantee across runs.

use std::collections::HashMap;

/// Maps token address strings to dense `[0, N)` integer IDs.
#[derive(Debug, Default)]
pub struct TokenInterner {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
}

impl TokenInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing ID for `address`, or assign and return the next
    /// free one.
    pub fn get_id(&mut self, address: &str) -> usize {
        if let Some(&id) = self.token_to_id.get(address) {
            return id;
        }
        let id = self.id_to_token.len();
        self.id_to_token.push(address.to_string());
        self.token_to_id.insert(address.to_string(), id);
        id
    }

    /// Look up the ID already assigned to `address`, without creating one.
    pub fn lookup(&self, address: &str) -> Option<usize> {
        self.token_to_id.get(address).copied()
    }

    /// Resolve an ID back to its address string.
    pub fn resolve(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Number of distinct tokens interned so far.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }
}
