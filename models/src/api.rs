//! Paths of the JSON API and of the dashboard pages.

pub const CONFIG: &str = "/api/config";
pub const TREES: &str = "/api/trees";

pub fn tree_items(tree_id: &str) -> String {
    format!("/api/tree/{}/items", tree_id)
}

pub fn build_details(build_id: &str) -> String {
    format!("/api/build/{}", build_id)
}

pub fn build_status_count(build_id: &str) -> String {
    format!("/api/build/{}/status-count", build_id)
}

pub fn build_details_page(tree_id: &str, build_id: &str) -> String {
    format!("/tree/{}/build/{}", tree_id, build_id)
}
