use derive_more::Display;

use crate::api;
use crate::build::BuildItem;

/// Lifecycle of a fetch as seen by the query switcher.
#[derive(PartialEq, Debug, Clone, Eq, Display)]
pub enum QueryStatus {
    #[display("pending")]
    Pending,
    #[display("error")]
    Error(String),
    #[display("success")]
    Success,
}

impl QueryStatus {
    /// An error wins over stale data; no data and no error is still pending.
    pub fn of<T>(data: Option<&T>, error: Option<&String>) -> Self {
        match (data, error) {
            (_, Some(err)) => QueryStatus::Error(err.clone()),
            (Some(_), None) => QueryStatus::Success,
            (None, None) => QueryStatus::Pending,
        }
    }
}

/// Keyed status-count fetch of one build.
#[derive(PartialEq, Debug, Clone, Eq)]
pub struct StatusCountQuery {
    pub build_id: String,
    pub enabled: bool,
}

impl StatusCountQuery {
    pub fn for_build(build: &BuildItem) -> Self {
        StatusCountQuery {
            build_id: build.id.clone(),
            enabled: build.has_id(),
        }
    }

    pub fn url(&self) -> Option<String> {
        self.enabled
            .then(|| api::build_status_count(&self.build_id))
    }
}
