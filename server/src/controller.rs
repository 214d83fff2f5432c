use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use models::config::PublicConfig;
use models::{AccordionItem, BuildCountsResponse, BuildDetails, TreeSummary};
use tracing::info;

use crate::error::Error;
use crate::{error, AppState};

pub async fn get_config(State(state): State<Arc<AppState>>) -> error::Result<Json<PublicConfig>> {
    Ok(Json(state.config.public()))
}

pub async fn get_trees(State(state): State<Arc<AppState>>) -> error::Result<Json<Vec<TreeSummary>>> {
    Ok(Json(state.store.tree_summaries().await?))
}

pub async fn get_tree_items(
    State(state): State<Arc<AppState>>,
    Path(tree_id): Path<String>,
) -> error::Result<Json<Vec<AccordionItem>>> {
    let tree = state.store.tree(&tree_id).await?;
    info!(tree_id = %tree_id, builds = tree.builds.len(), tests = tree.tests.len(), "Tree items");
    Ok(Json(tree.items()))
}

pub async fn get_build(
    State(state): State<Arc<AppState>>,
    Path(build_id): Path<String>,
) -> error::Result<Json<BuildDetails>> {
    let tree = state.store.tree_of_build(&build_id).await?;
    tree.build_details(&build_id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("build {}", build_id)))
}

pub async fn get_build_status_count(
    State(state): State<Arc<AppState>>,
    Path(build_id): Path<String>,
) -> error::Result<Json<BuildCountsResponse>> {
    let tree = state.store.tree_of_build(&build_id).await?;
    tree.find_build(&build_id)
        .map(|record| {
            Json(BuildCountsResponse {
                build_counts: record.build_counts,
            })
        })
        .ok_or_else(|| Error::NotFound(format!("build {}", build_id)))
}
