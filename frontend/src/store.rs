use std::collections::BTreeSet;

use yewdux::store::Store;

/// Keys of the accordion rows that are currently open.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct ExpandedItems {
    pub keys: BTreeSet<String>,
}

impl ExpandedItems {
    pub fn is_open(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_owned());
        }
    }
}
