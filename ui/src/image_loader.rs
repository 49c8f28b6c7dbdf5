//! Image loading and caching functionality for the picstash UI.

use api_client::PhotoId;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Semaphore;

#[derive(Debug, Error, Clone)]
pub enum ImageLoadError {
    #[error("network error: {0}")]
    Request(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("loader closed")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct ImageLoader {
    cache_dir: PathBuf,
    client: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl ImageLoader {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            client: reqwest::Client::new(),
            semaphore: Arc::new(Semaphore::new(4)),
        }
    }

    /// Fetch a photo's bytes, caching them on disk keyed by photo id. At most
    /// four downloads run at a time.
    pub async fn load(&self, photo: PhotoId, url: &str) -> Result<Handle, ImageLoadError> {
        let start = Instant::now();
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ImageLoadError::Closed)?;

        let cache_path = self.cache_dir.join("images").join(format!("{}.img", photo));
        if cache_path.exists() {
            return Ok(Handle::from_path(&cache_path));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageLoadError::Request(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageLoadError::Request(e.to_string()))?;

        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ImageLoadError::Io(e.to_string()))?;
        }
        fs::write(&cache_path, &bytes)
            .await
            .map_err(|e| ImageLoadError::Io(e.to_string()))?;

        tracing::debug!("image_time_ms" = %start.elapsed().as_millis(), "id" = photo);
        Ok(Handle::from_path(&cache_path))
    }
}

#[cfg(test)]
mod tests {
    use super::ImageLoader;
    use httpmock::prelude::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_caches_to_disk() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/1.jpg");
            then.status(200).body("img");
        });
        let dir = tempdir().unwrap();
        let loader = ImageLoader::new(dir.path().to_path_buf());
        let url = server.url("/1.jpg");
        let _ = loader.load(1, &url).await.unwrap();
        assert!(dir.path().join("images/1.img").exists());
        mock.assert();

        // Second load is served from disk, no new request.
        let _ = loader.load(1, &url).await.unwrap();
        mock.assert_hits(1);
    }
}
