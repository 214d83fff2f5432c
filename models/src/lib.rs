pub mod accordion;
pub mod api;
pub mod build;
pub mod chart;
pub mod config;
pub mod links;
pub mod message;
pub mod panel;
pub mod query;
pub mod tree;

pub use accordion::{AccordionItem, TestItem};
pub use build::{
    BuildArtifacts, BuildCountsResponse, BuildDetails, BuildItem, BuildRecord, BuildStatusFilter,
    BuildTestCounts,
};
pub use message::MessageId;
pub use tree::{TreeRecord, TreeSummary};
