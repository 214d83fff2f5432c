use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::accordion::AccordionItem;
use crate::api;
use crate::build::BuildItem;
use crate::links::{build_links, LinkEntry};
use crate::query::StatusCountQuery;

/// Ordered query string pairs of the current page.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Eq, From)]
#[serde(transparent)]
pub struct SearchParams(pub Vec<(String, String)>);

impl SearchParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first `key` pair in place, or appends it. Other pairs keep their order.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_owned(),
            None => self.0.push((key.to_owned(), value.to_owned())),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }
}

/// How a navigation treats the query string of the page it leaves.
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum SearchPolicy {
    PreserveUnchanged,
}

#[derive(PartialEq, Debug, Clone, Eq)]
pub struct NavigationRequest {
    pub tree_id: String,
    pub build_id: String,
    pub search: SearchPolicy,
}

impl NavigationRequest {
    pub fn path(&self) -> String {
        api::build_details_page(&self.tree_id, &self.build_id)
    }

    pub fn resolve_search(&self, current: &SearchParams) -> SearchParams {
        match self.search {
            SearchPolicy::PreserveUnchanged => current.clone(),
        }
    }
}

/// View model of the expanded build row.
#[derive(Debug, Clone, Copy)]
pub struct BuildPanel<'a> {
    tree_id: &'a str,
    build: &'a BuildItem,
}

impl<'a> BuildPanel<'a> {
    pub fn new(tree_id: &'a str, build: &'a BuildItem) -> Self {
        BuildPanel { tree_id, build }
    }

    /// Narrows an accordion item to its build variant.
    pub fn from_item(tree_id: &'a str, item: &'a AccordionItem) -> Option<Self> {
        item.as_build().map(|build| BuildPanel::new(tree_id, build))
    }

    pub fn build(&self) -> &'a BuildItem {
        self.build
    }

    pub fn status_query(&self) -> StatusCountQuery {
        StatusCountQuery::for_build(self.build)
    }

    pub fn links(&self) -> Vec<LinkEntry> {
        build_links(&self.build.artifacts)
    }

    pub fn can_show_more(&self) -> bool {
        self.build.has_id()
    }

    pub fn show_more_request(&self) -> Option<NavigationRequest> {
        self.can_show_more().then(|| NavigationRequest {
            tree_id: self.tree_id.to_owned(),
            build_id: self.build.id.clone(),
            search: SearchPolicy::PreserveUnchanged,
        })
    }

    /// Hands the build details navigation to `navigate`. Does nothing for a build without id.
    pub fn show_more<F>(&self, navigate: F)
    where
        F: FnOnce(NavigationRequest),
    {
        if let Some(request) = self.show_more_request() {
            navigate(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::accordion::TestItem;
    use crate::build::BuildArtifacts;
    use crate::message::MessageId;

    use super::*;

    fn build(id: &str) -> BuildItem {
        BuildItem {
            id: id.into(),
            config_name: "defconfig".into(),
            artifacts: BuildArtifacts {
                kernel_config: Some("https://files/config".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn show_more_navigates_to_build_details_with_search_untouched() {
        let build = build("b-77");
        let panel = BuildPanel::new("mainline", &build);
        let current = SearchParams::from(vec![
            ("status".to_string(), "valid".to_string()),
            ("origin".to_string(), "maestro".to_string()),
        ]);

        let mut received = None;
        panel.show_more(|request| received = Some(request));

        let request = received.expect("navigation should be requested");
        assert_eq!(request.tree_id, "mainline");
        assert_eq!(request.build_id, "b-77");
        assert_eq!(request.path(), "/tree/mainline/build/b-77");
        assert_eq!(request.search, SearchPolicy::PreserveUnchanged);
        assert_eq!(request.resolve_search(&current), current);
    }

    #[test]
    fn build_without_id_keeps_links_but_skips_fetch_and_navigation() {
        let build = build("");
        let panel = BuildPanel::new("mainline", &build);

        let mut called = false;
        panel.show_more(|_| called = true);

        assert!(!called);
        assert!(!panel.status_query().enabled);
        assert_eq!(panel.links().len(), 1);
        assert_eq!(panel.links()[0].title, MessageId::KernelConfig);
    }

    #[test]
    fn panel_only_accepts_build_items() {
        let build_item = AccordionItem::Build(build("b1"));
        let test_item = AccordionItem::Test(TestItem {
            id: "t1".into(),
            path: "kselftest.cpufreq".into(),
            status: "FAIL".into(),
            duration_ms: None,
        });

        assert!(BuildPanel::from_item("next", &build_item).is_some());
        assert!(BuildPanel::from_item("next", &test_item).is_none());
    }

    #[test]
    fn search_params_replace_in_place() {
        let params = SearchParams::from(vec![
            ("status".to_string(), "all".to_string()),
            ("page".to_string(), "2".to_string()),
        ]);

        let params = params.with("status", "invalid").with("origin", "x");

        assert_eq!(params.get("status"), Some("invalid"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["status", "page", "origin"]);
    }
}
