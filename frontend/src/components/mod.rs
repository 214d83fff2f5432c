pub mod accordion;
pub mod build_accordion_content;
pub mod build_details;
pub mod links_group;
pub mod navigation;
pub mod query_switcher;
pub mod select;
pub mod status_chart;
pub mod test_accordion_content;
pub mod tree_details;
pub mod tree_list;
