use serde::{Deserialize, Serialize};

use crate::accordion::{AccordionItem, TestItem};
use crate::build::{BuildDetails, BuildRecord};

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct TreeSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub git_branch: Option<String>,
}

impl Ord for TreeSummary {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.git_branch.cmp(&other.git_branch))
    }
}

impl PartialOrd for TreeSummary {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One `trees/<id>.json` file of the data directory.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct TreeRecord {
    #[serde(flatten)]
    pub summary: TreeSummary,
    #[serde(default)]
    pub builds: Vec<BuildRecord>,
    #[serde(default)]
    pub tests: Vec<TestItem>,
}

impl TreeRecord {
    /// Builds first, then tests, each in file order.
    pub fn items(&self) -> Vec<AccordionItem> {
        self.builds
            .iter()
            .map(|b| AccordionItem::Build(b.item.clone()))
            .chain(self.tests.iter().cloned().map(AccordionItem::Test))
            .collect()
    }

    pub fn find_build(&self, build_id: &str) -> Option<&BuildRecord> {
        self.builds.iter().find(|b| b.item.id == build_id)
    }

    pub fn build_details(&self, build_id: &str) -> Option<BuildDetails> {
        self.find_build(build_id).map(|b| BuildDetails {
            tree_id: self.summary.id.clone(),
            build: b.item.clone(),
        })
    }
}
