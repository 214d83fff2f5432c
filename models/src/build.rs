use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Aggregate test outcome counters of one build.
///
/// Every counter may be missing or `null` on the wire and then counts as zero.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Copy, Eq, Hash)]
pub struct BuildTestCounts {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub pass_tests: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error_tests: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub skip_tests: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub miss_tests: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fail_tests: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub done_tests: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct BuildCountsResponse {
    #[serde(default)]
    pub build_counts: BuildTestCounts,
}

/// Paths of the files a build produced. Empty strings count as absent.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq, Hash)]
pub struct BuildArtifacts {
    pub kernel_image: Option<String>,
    pub kernel_config: Option<String>,
    pub dtb: Option<String>,
    pub build_logs: Option<String>,
    pub system_map: Option<String>,
    pub modules: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct BuildItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub config_name: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub compiler: String,
    pub valid: Option<bool>,
    pub start_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub artifacts: BuildArtifacts,
}

impl BuildItem {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A build as stored on disk: the listing fields plus its counters.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct BuildRecord {
    #[serde(flatten)]
    pub item: BuildItem,
    #[serde(default)]
    pub build_counts: BuildTestCounts,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Eq)]
pub struct BuildDetails {
    pub tree_id: String,
    pub build: BuildItem,
}

/// Which builds the tree page shows. Lives in the `status` query parameter.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Copy, Eq, Display)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatusFilter {
    #[default]
    #[display("all")]
    All,
    #[display("valid")]
    Valid,
    #[display("invalid")]
    Invalid,
}

impl BuildStatusFilter {
    pub const ALL: [BuildStatusFilter; 3] = [Self::All, Self::Valid, Self::Invalid];

    pub fn from_query_value(value: &str) -> Self {
        match value {
            "valid" => Self::Valid,
            "invalid" => Self::Invalid,
            _ => Self::All,
        }
    }

    pub fn matches(&self, build: &BuildItem) -> bool {
        match self {
            Self::All => true,
            Self::Valid => build.valid == Some(true),
            Self::Invalid => build.valid == Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_missing_and_null_fields_to_zero() {
        let counts: BuildTestCounts =
            serde_json::from_str(r#"{"pass_tests": 4, "fail_tests": null}"#).unwrap();
        assert_eq!(
            counts,
            BuildTestCounts {
                pass_tests: 4,
                ..Default::default()
            }
        );
    }

    #[test]
    fn counts_response_without_envelope_content_is_all_zero() {
        let response: BuildCountsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.build_counts, BuildTestCounts::default());
    }

    #[test]
    fn build_record_reads_flat_json() {
        let record: BuildRecord = serde_json::from_str(
            r#"{
                "id": "maestro:1",
                "config_name": "defconfig",
                "architecture": "arm64",
                "valid": true,
                "start_time": "2024-05-02T10:00:00Z",
                "kernel_config": "https://storage/config",
                "build_counts": {"pass_tests": 10, "error_tests": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(record.item.id, "maestro:1");
        assert_eq!(
            record.item.artifacts.kernel_config.as_deref(),
            Some("https://storage/config")
        );
        assert_eq!(record.item.artifacts.dtb, None);
        assert_eq!(
            record.build_counts,
            BuildTestCounts {
                pass_tests: 10,
                error_tests: 1,
                ..Default::default()
            }
        );
        assert!(record.item.start_time.is_some());
    }

    #[test]
    fn status_filter_matches_validity() {
        let valid = BuildItem {
            valid: Some(true),
            ..Default::default()
        };
        let unknown = BuildItem::default();

        assert!(BuildStatusFilter::All.matches(&unknown));
        assert!(BuildStatusFilter::Valid.matches(&valid));
        assert!(!BuildStatusFilter::Invalid.matches(&valid));
        assert!(!BuildStatusFilter::Valid.matches(&unknown));
    }

    #[test]
    fn status_filter_falls_back_to_all() {
        assert_eq!(
            BuildStatusFilter::from_query_value("invalid"),
            BuildStatusFilter::Invalid
        );
        assert_eq!(
            BuildStatusFilter::from_query_value("bogus"),
            BuildStatusFilter::All
        );
        assert_eq!(BuildStatusFilter::Valid.to_string(), "valid");
    }
}
