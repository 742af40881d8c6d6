//! Application configuration: the genre catalogue and the hand-off to run on submit.

use std::time::Duration;

use dioxus::logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};

use crate::handoff::{Handoff, Immediate, Latency};
use crate::storage::Storage;

/// Genres offered by default, in the order their checkboxes appear.
pub const DEFAULT_GENRES: &[&str] = &[
    "Action",
    "Sci-Fi",
    "Film Noir",
    "Romance",
    "Fiction",
    "Contemporary",
    "Contemporary Romance",
    "Audiobook",
    "Adult",
    "Chick Lit",
    "Thriller",
    "Mystery",
    "Mystery Thriller",
    "Suspense",
    "Psychological Thriller",
    "Nonfiction",
    "Memoir",
    "Biography",
    "Autobiography",
    "Biography Memoir",
    "LGBT",
    "Horror",
    "Literary Fiction",
    "Feminist",
    "African American",
    "Magical Realism",
    "Historical Fiction",
    "Science Fiction",
    "Mental Health",
    "Essays",
    "Humor",
    "Sports",
    "Christmas",
    "Queer",
    "New Adult",
    "Gothic",
    "Classic",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub genres: Vec<String>,
    pub handoff: HandoffSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            handoff: HandoffSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HandoffSettings {
    #[default]
    Immediate,
    Latency {
        millis: u64,
    },
}

impl HandoffSettings {
    pub fn build(&self) -> Box<dyn Handoff> {
        match self {
            HandoffSettings::Immediate => Box::new(Immediate),
            HandoffSettings::Latency { millis } => {
                Box::new(Latency::new(Duration::from_millis(*millis)))
            }
        }
    }
}

/// Loads the stored configuration, writing the defaults out the first time.
///
/// A store that cannot be read is logged and the defaults are used instead.
pub async fn load_or_init(storage: &impl Storage) -> AppConfig {
    match storage.load_config().await {
        Ok(Some(config)) => {
            info!("loaded configuration with {} genre(s)", config.genres.len());
            config
        }
        Ok(None) => {
            let config = AppConfig::default();
            if let Err(e) = storage.save_config(&config).await {
                warn!("Could not save default configuration: {e:?}");
            }
            info!("initialised default configuration");
            config
        }
        Err(e) => {
            warn!("Could not load configuration, using defaults: {e:?}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct MemoryStorage {
        stored: RefCell<Option<AppConfig>>,
        broken: bool,
    }

    #[async_trait(?Send)]
    impl Storage for MemoryStorage {
        async fn save_config(&self, config: &AppConfig) -> anyhow::Result<()> {
            *self.stored.borrow_mut() = Some(config.clone());
            Ok(())
        }

        async fn load_config(&self) -> anyhow::Result<Option<AppConfig>> {
            if self.broken {
                return Err(anyhow!("corrupt"));
            }
            Ok(self.stored.borrow().clone())
        }
    }

    #[test]
    fn default_catalogue_has_every_genre_once() {
        let config = AppConfig::default();
        assert_eq!(config.genres.len(), 37);
        let mut unique = config.genres.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), config.genres.len());
        assert_eq!(config.handoff, HandoffSettings::Immediate);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_value(json!({
            "handoff": { "kind": "latency", "millis": 2000 }
        }))
        .unwrap();
        assert_eq!(config.genres, AppConfig::default().genres);
        assert_eq!(config.handoff, HandoffSettings::Latency { millis: 2000 });

        let config: AppConfig = serde_json::from_value(json!({ "genres": ["Horror"] })).unwrap();
        assert_eq!(config.genres, vec!["Horror".to_string()]);
        assert_eq!(config.handoff, HandoffSettings::Immediate);
    }

    #[test]
    fn settings_build_the_matching_handoff() {
        assert_eq!(HandoffSettings::Immediate.build().get_name(), "immediate");
        assert_eq!(HandoffSettings::Latency { millis: 5 }.build().get_name(), "latency");
    }

    #[tokio::test]
    async fn first_load_stores_defaults() {
        let storage = MemoryStorage { stored: RefCell::new(None), broken: false };
        let config = load_or_init(&storage).await;
        assert_eq!(config, AppConfig::default());
        assert_eq!(storage.stored.borrow().as_ref(), Some(&config));
    }

    #[tokio::test]
    async fn stored_config_wins() {
        let custom = AppConfig {
            genres: vec!["Gothic".into()],
            handoff: HandoffSettings::Latency { millis: 10 },
        };
        let storage = MemoryStorage { stored: RefCell::new(Some(custom.clone())), broken: false };
        assert_eq!(load_or_init(&storage).await, custom);
    }

    #[tokio::test]
    async fn unreadable_store_uses_defaults() {
        let storage = MemoryStorage { stored: RefCell::new(None), broken: true };
        assert_eq!(load_or_init(&storage).await, AppConfig::default());
        assert!(storage.stored.borrow().is_none());
    }
}
