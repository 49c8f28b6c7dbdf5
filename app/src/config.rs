use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub api_base_url: String,
    pub language: String,
    pub owner_id: Option<i64>,
    pub image_preload: usize,
    pub cache_path: PathBuf,
}

pub struct AppConfigOverrides {
    pub log_level: Option<String>,
    pub api_base_url: Option<String>,
    pub language: Option<String>,
    pub owner_id: Option<i64>,
    pub image_preload: Option<usize>,
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".picstash")
        .join("config")
}

fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".picstash")
}

impl AppConfig {
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let mut builder = config::Config::builder();
        let path = path.unwrap_or_else(default_config_path);
        builder = builder.add_source(config::File::from(path).required(false));
        let cfg = builder.build().unwrap_or_default();

        let log_level = cfg
            .get_string("log_level")
            .unwrap_or_else(|_| "info".to_string());
        let api_base_url = cfg
            .get_string("api_base_url")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        let language = cfg
            .get_string("language")
            .unwrap_or_else(|_| "en".to_string());
        let owner_id = cfg.get_int("owner_id").ok();
        let image_preload = cfg.get_int("image_preload").unwrap_or(20) as usize;
        let cache_path = cfg
            .get_string("cache_path")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_path());

        Self {
            log_level,
            api_base_url,
            language,
            owner_id,
            image_preload,
            cache_path,
        }
    }

    pub fn apply_overrides(mut self, ov: &AppConfigOverrides) -> Self {
        if let Some(level) = &ov.log_level {
            self.log_level = level.clone();
        }
        if let Some(url) = &ov.api_base_url {
            self.api_base_url = url.clone();
        }
        if let Some(language) = &ov.language {
            self.language = language.clone();
        }
        if let Some(owner) = ov.owner_id {
            self.owner_id = Some(owner);
        }
        if let Some(preload) = ov.image_preload {
            self.image_preload = preload;
        }
        self
    }

    pub fn save_to(&self, path: Option<PathBuf>) -> std::io::Result<()> {
        let path = path.unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = toml::to_string(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}
