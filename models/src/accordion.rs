use serde::{Deserialize, Serialize};

use crate::build::BuildItem;

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq)]
pub struct TestItem {
    #[serde(default)]
    pub id: String,
    pub path: String,
    pub status: String,
    pub duration_ms: Option<u64>,
}

/// Expandable row content of the tree page.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccordionItem {
    Build(BuildItem),
    Test(TestItem),
}

impl AccordionItem {
    /// Stable key for list rendering and the expanded-rows store.
    pub fn key(&self) -> String {
        match self {
            AccordionItem::Build(build) => format!("build:{}", build.id),
            AccordionItem::Test(test) => format!("test:{}:{}", test.id, test.path),
        }
    }

    pub fn as_build(&self) -> Option<&BuildItem> {
        match self {
            AccordionItem::Build(build) => Some(build),
            AccordionItem::Test(_) => None,
        }
    }

    pub fn as_test(&self) -> Option<&TestItem> {
        match self {
            AccordionItem::Test(test) => Some(test),
            AccordionItem::Build(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_tagged_by_kind() {
        let items: Vec<AccordionItem> = serde_json::from_str(
            r#"[
                {"kind": "build", "id": "b1", "architecture": "x86_64", "dtb": "https://f/dtb"},
                {"kind": "test", "id": "t1", "path": "baseline.login", "status": "PASS"}
            ]"#,
        )
        .unwrap();

        let build = items[0].as_build().expect("first item is a build");
        assert_eq!(build.id, "b1");
        assert_eq!(build.artifacts.dtb.as_deref(), Some("https://f/dtb"));
        assert!(items[0].as_test().is_none());

        assert!(items[1].as_build().is_none());
        assert_eq!(items[1].as_test().map(|t| t.status.as_str()), Some("PASS"));
    }

    #[test]
    fn serialized_build_keeps_tag() {
        let item = AccordionItem::Build(BuildItem {
            id: "b2".into(),
            ..Default::default()
        });

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "build");
        assert_eq!(json["id"], "b2");
        assert_eq!(item.key(), "build:b2");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = serde_json::from_str::<AccordionItem>(r#"{"kind": "boot", "id": "x"}"#);
        assert!(parsed.is_err());
    }
}
