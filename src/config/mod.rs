use anyhow::Result;
use std::path::PathBuf;

use crate::game::quiz::definition::DEFAULT_LOCATION;
use crate::game::quiz::settings::Settings;
use crate::storage::FileStore;


#[derive(Clone, Debug)]
pub struct Config {
    /// File path or http(s) URL of the question bank
    pub questions: String,
    /// Overrides the per-user data directory
    pub storage_dir: Option<PathBuf>,
    /// Keep saved/missed lists in memory only
    pub ephemeral: bool,
    pub log_filter: String,
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: DEFAULT_LOCATION.to_owned(),
            storage_dir: None,
            ephemeral: false,
            log_filter: "warn".to_owned(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let flag = |name: &str| lookup(name).and_then(|v| v.trim().parse::<bool>().ok());
        Self {
            questions: lookup("QUIZ_QUESTIONS").unwrap_or(default.questions),
            storage_dir: lookup("QUIZ_STORAGE_DIR").map(PathBuf::from),
            ephemeral: flag("QUIZ_EPHEMERAL").unwrap_or(default.ephemeral),
            log_filter: lookup("QUIZ_LOG").unwrap_or(default.log_filter),
            settings: Settings {
                filter: lookup("QUIZ_FILTER")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(default.settings.filter),
                randomize: flag("QUIZ_RANDOM").unwrap_or(default.settings.randomize),
                instant_check: flag("QUIZ_INSTANT").unwrap_or(default.settings.instant_check),
                nav_color: flag("QUIZ_NAV_COLOR").unwrap_or(default.settings.nav_color),
            },
        }
    }

    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStore::default_location(),
        }
    }
}
