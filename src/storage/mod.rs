use async_trait::async_trait;

use crate::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage;
#[cfg(target_arch = "wasm32")]
mod static_storage;

#[cfg(not(target_arch = "wasm32"))]
type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
type AppStorage = static_storage::StaticStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_config(&self, config: &AppConfig) -> anyhow::Result<()>;
    async fn load_config(&self) -> anyhow::Result<Option<AppConfig>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use std::path::PathBuf;
    use directories_next::ProjectDirs;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "genre-picker") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    let storage = AppStorage::new(base);
    Ok(storage)
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    Ok(AppStorage)
}
