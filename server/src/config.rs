use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use models::config::PublicConfig;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub(crate) struct ServerConfig {
    /// Directory holding `trees/<tree_id>.json`
    pub data_dir: PathBuf,
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            data_dir: PathBuf::from("data"),
            title: PublicConfig::default().title,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> figment::Result<Self> {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("KERNELBOARD_"))
            .extract()
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = ServerConfig::load(&dir.path().join("kernelboard.yml")).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.public(), PublicConfig::default());
    }

    #[test]
    fn yaml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernelboard.yml");
        fs::write(&path, "data_dir: /srv/kernelboard\ntitle: Staging\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/kernelboard"));
        assert_eq!(config.public().title, "Staging");
    }
}
