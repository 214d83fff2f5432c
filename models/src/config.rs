use serde::{Deserialize, Serialize};

/// Settings the server hands to the dashboard.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PublicConfig {
    pub title: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        PublicConfig {
            title: "KernelCI Dashboard".into(),
        }
    }
}
