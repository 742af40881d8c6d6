use anyhow::Result;

use crate::config::AppConfig;

/// Browser builds ship with the built-in configuration and keep nothing.
#[derive(Debug, Default)]
pub struct StaticStorage;

#[async_trait::async_trait(?Send)]
impl super::Storage for StaticStorage {
    async fn save_config(&self, _config: &AppConfig) -> Result<()> {
        Ok(())
    }

    async fn load_config(&self) -> Result<Option<AppConfig>> {
        Ok(None)
    }
}
