use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;

use crate::config::AppConfig;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn config_path(&self) -> PathBuf {
        self.base.join("config.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_config(&self, config: &AppConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::create_dir_all(&self.base).await?;
        fs::write(self.config_path(), json).await?;
        Ok(())
    }

    async fn load_config(&self) -> Result<Option<AppConfig>> {
        let path = self.config_path();
        match fs::read_to_string(&path).await {
            Ok(data) => {
                let config = serde_json::from_str(&data)
                    .with_context(|| format!("malformed config at {}", path.display()))?;
                Ok(Some(config))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("could not read {}", path.display())),
        }
    }
}
