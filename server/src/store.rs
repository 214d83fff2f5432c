use std::path::{Path, PathBuf};

use models::{TreeRecord, TreeSummary};
use tokio::fs::{self, read_dir};
use tracing::warn;

use crate::error::{Error, Result};

/// Read-only view of the data directory. Files are read per request.
pub(crate) struct DataStore {
    trees_dir: PathBuf,
}

/// Reads a tree file. The file stem is the tree id, whatever the file content says.
async fn read_tree_file(path: &Path) -> Result<TreeRecord> {
    let contents = fs::read(path).await?;
    let contents = String::from_utf8_lossy(&contents);
    let mut tree: TreeRecord = serde_json::from_str(&contents)?;
    if let Some(stem) = path.file_stem() {
        tree.summary.id = stem.to_string_lossy().into_owned();
    }
    Ok(tree)
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map_or(false, |m| m.is_file())
}

fn is_plain_id(id: &str) -> bool {
    !id.is_empty() && !id.starts_with('.') && !id.contains(['/', '\\'])
}

impl DataStore {
    pub fn new(data_dir: &Path) -> Self {
        DataStore {
            trees_dir: data_dir.join("trees"),
        }
    }

    pub async fn tree(&self, tree_id: &str) -> Result<TreeRecord> {
        let path = self.trees_dir.join(format!("{}.json", tree_id));
        if !is_plain_id(tree_id) || !is_file(&path).await {
            return Err(Error::NotFound(format!("tree {}", tree_id)));
        }
        read_tree_file(&path).await
    }

    /// All readable trees. Unparseable files are skipped with a warning,
    /// a missing trees directory reads as no trees.
    pub async fn trees(&self) -> Result<Vec<TreeRecord>> {
        let mut dir = match read_dir(&self.trees_dir).await {
            Ok(dir) => dir,
            Err(err) => {
                warn!("Cannot read trees directory {:?} because of {:?}", &self.trees_dir, err);
                return Ok(vec![]);
            }
        };

        let mut res = vec![];
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            match read_tree_file(&path).await {
                Ok(tree) => res.push(tree),
                Err(err) => warn!("Cannot read tree file {:?} because of {:?}", &path, err),
            }
        }
        Ok(res)
    }

    pub async fn tree_summaries(&self) -> Result<Vec<TreeSummary>> {
        let mut summaries: Vec<TreeSummary> = self
            .trees()
            .await?
            .into_iter()
            .map(|tree| tree.summary)
            .collect();
        summaries.sort();
        Ok(summaries)
    }

    /// The tree holding `build_id`.
    pub async fn tree_of_build(&self, build_id: &str) -> Result<TreeRecord> {
        self.trees()
            .await?
            .into_iter()
            .find(|tree| tree.find_build(build_id).is_some())
            .ok_or_else(|| Error::NotFound(format!("build {}", build_id)))
    }
}
