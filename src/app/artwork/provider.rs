use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use url::Url;

use super::{ArtworkError, ImageData};

#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<ImageData, ArtworkError>;
}

pub struct NetworkProvider {
    client: reqwest::Client,
}

impl NetworkProvider {
    pub fn new() -> Result<Self, ArtworkError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArtworkError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ArtworkProvider for NetworkProvider {
    async fn fetch(&self, url: &Url) -> Result<ImageData, ArtworkError> {
        log::debug!("artwork: GET {}", url);
        let network = |source| ArtworkError::Network {
            url: url.to_string(),
            source,
        };

        let resp = self
            .client
            .get(url.clone())
            .header("Accept", "image/png,image/jpeg,image/gif,image/webp")
            .send()
            .await
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ArtworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await.map_err(network)?;
        log::debug!("artwork: {} size={}B", url, bytes.len());

        // Decoding is CPU-bound; keep it off the async workers
        let data = tokio::task::spawn_blocking(move || ImageData::decode(&bytes)).await??;
        Ok(data)
    }
}

/// Serves artwork from PNG files under `cache_dir`, filling misses from `inner`.
pub struct CachingProvider<P: ArtworkProvider> {
    inner: P,
    cache_dir: PathBuf,
}

impl<P: ArtworkProvider> CachingProvider<P> {
    pub fn new(inner: P, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    /// First 16 hex chars of SHA-256(url).
    fn cache_key(url: &Url) -> String {
        let digest = Sha256::digest(url.as_str().as_bytes());
        digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn cache_path(&self, url: &Url) -> PathBuf {
        self.cache_dir.join(format!("{}.png", Self::cache_key(url)))
    }

    async fn load_from_cache(&self, path: &Path) -> Option<ImageData> {
        let bytes = tokio::fs::read(path).await.ok()?;
        match tokio::task::spawn_blocking(move || ImageData::decode(&bytes)).await {
            Ok(Ok(data)) => Some(data),
            Ok(Err(e)) => {
                log::warn!("artwork cache: corrupt {}: {}", path.to_string_lossy(), e);
                None
            }
            Err(e) => {
                log::warn!("artwork cache: decode task failed: {}", e);
                None
            }
        }
    }

    async fn save_to_cache(&self, path: &Path, data: &ImageData) -> Result<(), ArtworkError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let path = path.to_path_buf();
        let data = data.clone();
        tokio::task::spawn_blocking(move || {
            image::save_buffer(
                &path,
                &data.rgba,
                data.width,
                data.height,
                image::ColorType::Rgba8,
            )
        })
        .await??;
        Ok(())
    }
}

#[async_trait]
impl<P: ArtworkProvider> ArtworkProvider for CachingProvider<P> {
    async fn fetch(&self, url: &Url) -> Result<ImageData, ArtworkError> {
        let path = self.cache_path(url);

        if let Some(cached) = self.load_from_cache(&path).await {
            log::trace!("artwork cache hit: {}", url);
            return Ok(cached);
        }

        let data = self.inner.fetch(url).await?;
        if let Err(e) = self.save_to_cache(&path, &data).await {
            log::warn!(
                "artwork cache: write {} failed: {}",
                path.to_string_lossy(),
                e
            );
        }
        Ok(data)
    }
}

impl<P: ArtworkProvider> std::fmt::Debug for CachingProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingProvider")
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves a 2x2 image for any URL containing "ok", fails otherwise.
    #[derive(Default, Clone)]
    pub(crate) struct FakeProvider {
        pub calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ArtworkProvider for FakeProvider {
        async fn fetch(&self, url: &Url) -> Result<ImageData, ArtworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.as_str().contains("ok") {
                Ok(ImageData::new(2, 2, vec![200; 16]))
            } else {
                Err(ArtworkError::Status {
                    status: 404,
                    url: url.to_string(),
                })
            }
        }
    }

    fn temp_cache_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}_{}", name, std::process::id()))
    }

    #[test]
    fn cache_key_is_stable_hex() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        let key = CachingProvider::<FakeProvider>::cache_key(&url);
        assert_eq!(key.len(), 16);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, CachingProvider::<FakeProvider>::cache_key(&url));
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_disk() {
        let dir = temp_cache_dir("catalog_artwork_cache");
        let fake = FakeProvider::default();
        let calls = fake.calls.clone();
        let provider = CachingProvider::new(fake, dir.clone());
        let url = Url::parse("https://example.com/ok.png").unwrap();

        let first = provider.fetch(&url).await.unwrap();
        let second = provider.fetch(&url).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert!(provider.cache_path(&url).is_file());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let dir = temp_cache_dir("catalog_artwork_cache_fail");
        let fake = FakeProvider::default();
        let calls = fake.calls.clone();
        let provider = CachingProvider::new(fake, dir.clone());
        let url = Url::parse("https://example.com/missing.png").unwrap();

        assert!(matches!(
            provider.fetch(&url).await,
            Err(ArtworkError::Status { status: 404, .. })
        ));
        assert!(provider.fetch(&url).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let _ = std::fs::remove_dir_all(dir);
    }
}
